// CLI for previewing accession codes without touching the catalog store.
// Simulates the count collaborator with an in-memory counter, so the
// printed code is exactly what the application would mint for the given
// prior item count.

use anyhow::{bail, Result};
use std::env;

use patrimonio::{
    derive_category_code, derive_parish_code, format_sequence, generate_accession_code_for_year,
    current_year, InMemoryCounter, ParishIdentity,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
        print_usage();
        return Ok(());
    }

    let options = parse_args(&args)?;
    run(&options)
}

struct Options {
    parish_name: String,
    category: String,
    location: Option<String>,
    prior_count: u64,
    year: i32,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut positional: Vec<&String> = Vec::new();
    let mut location = None;
    let mut prior_count = 0;
    let mut year = current_year();
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--location" => match iter.next() {
                Some(v) => location = Some(v.clone()),
                None => bail!("--location requires a value"),
            },
            "--count" => match iter.next() {
                Some(v) => prior_count = v.parse()?,
                None => bail!("--count requires a value"),
            },
            "--year" => match iter.next() {
                Some(v) => year = v.parse()?,
                None => bail!("--year requires a value"),
            },
            "--json" => json = true,
            flag if flag.starts_with("--") => bail!("unknown option: {}", flag),
            _ => positional.push(arg),
        }
    }

    if positional.len() != 2 {
        print_usage();
        bail!("expected <parish-name> and <category>");
    }

    Ok(Options {
        parish_name: positional[0].clone(),
        category: positional[1].clone(),
        location,
        prior_count,
        year,
        json,
    })
}

fn run(options: &Options) -> Result<()> {
    let identity = match &options.location {
        Some(location) => ParishIdentity::with_location(&options.parish_name, location),
        None => ParishIdentity::new(&options.parish_name),
    };

    // Simulated catalog: one parish with the requested prior count
    let parish_id = uuid::Uuid::new_v4().to_string();
    let counter = InMemoryCounter::with_count(parish_id.clone(), options.prior_count);

    let parish_code = derive_parish_code(&identity);
    let category_code = derive_category_code(&options.category);
    let sequence = format_sequence(options.prior_count + 1);

    let code = generate_accession_code_for_year(
        &identity,
        &parish_id,
        &options.category,
        &counter,
        options.year,
    )?;

    if options.json {
        let output = serde_json::json!({
            "parish": identity,
            "parish_code": parish_code,
            "category": options.category,
            "category_code": category_code,
            "year": options.year,
            "sequence": sequence,
            "accession_code": code,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("📍 Parroquia:  {} → {}", options.parish_name, parish_code);
    println!("🎨 Categoría:  {} → {}", options.category, category_code);
    println!("📅 Año:        {}", options.year);
    println!("🔢 Secuencia:  {} items previos → {}", options.prior_count, sequence);
    println!();
    println!("✅ Número de inventario: {}", code);

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: patrimonio <parish-name> <category> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --location <name>   Parish locality (legacy code scheme input)");
    eprintln!("  --count <n>         Items already catalogued for the parish (default 0)");
    eprintln!("  --year <yyyy>       Year segment (default: current year)");
    eprintln!("  --json              Emit the derivation as JSON");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  patrimonio \"Santa María la Mayor\" Orfebrería --count 24");
}
