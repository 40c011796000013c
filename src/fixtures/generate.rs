//! Fixture generate command handler.

use super::load_schema;
use crate::GenerateArgs;
use anyhow::Context;
use record_generator::FixtureGenerator;
use record_json::record_to_json;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Run the generate command, writing to `--output` or stdout.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let written = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {path:?}"))?;
            let mut writer = BufWriter::new(file);
            let written = write_records(&args, &mut writer)?;
            writer
                .flush()
                .with_context(|| format!("Failed to write output file: {path:?}"))?;
            written
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            let written = write_records(&args, &mut writer)?;
            writer.flush()?;
            written
        }
    };

    tracing::info!("Generated {written} records");
    Ok(())
}

/// Generate records for the selected sets and write them as JSON Lines.
///
/// Returns the number of records written.
pub fn write_records<W: Write>(args: &GenerateArgs, writer: &mut W) -> anyhow::Result<u64> {
    let schema = load_schema(&args.schema_opts.schema)?;
    let seed = args.seed.or(schema.seed).unwrap_or(0);

    let available: Vec<String> = schema.set_names().into_iter().map(String::from).collect();
    let sets = if args.sets.is_empty() {
        available.clone()
    } else {
        args.sets.clone()
    };
    if let Some(missing) = sets.iter().find(|set| !available.contains(*set)) {
        anyhow::bail!(
            "Set '{missing}' not found in schema (available: {})",
            available.join(", ")
        );
    }

    let mut generator =
        FixtureGenerator::new(schema, seed).context("Failed to build fixture generators")?;
    if args.start_index > 0 {
        generator = generator
            .with_start_index(args.start_index)
            .context("Failed to build fixture generators")?;
    }

    let mut written = 0;
    for set in &sets {
        tracing::info!(
            set = %set,
            count = args.count,
            seed,
            start_index = args.start_index,
            "Generating records"
        );

        for record in generator.records(set, args.count)? {
            let record =
                record.with_context(|| format!("Failed to generate record for set '{set}'"))?;
            serde_json::to_writer(&mut *writer, &record_to_json(&record))?;
            writer.write_all(b"\n")?;
            written += 1;
        }
    }

    Ok(written)
}
