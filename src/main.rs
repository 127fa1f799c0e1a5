use anyhow::{bail, Context, Result};
use std::env;
use std::io::{stdout, BufWriter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chart_of_accounts::{export, path_string, standard_catalog, Account, Catalog, Classifier};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "warn,chart_of_accounts=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let catalog = standard_catalog().context("Seed chart of accounts failed validation")?;

    match args.get(1).map(String::as_str) {
        Some("classify") => run_classify(&catalog, &args[2..])?,
        Some("children") => run_children(&catalog, &args[2..])?,
        Some("path") => run_path(&catalog, &args[2..])?,
        Some("export") => run_export(&catalog, args.get(2).map(String::as_str))?,
        Some(other) => bail!("Unknown command: {other}. Use classify | children | path | export"),
        None => print_tree(&catalog),
    }

    Ok(())
}

fn required_code(args: &[String]) -> Result<&str> {
    args.first()
        .map(String::as_str)
        .context("Missing account code argument")
}

fn run_classify(catalog: &Catalog, args: &[String]) -> Result<()> {
    let code = required_code(args)?;

    // Default to the catalog's own name when none is given
    let name = match args.get(1) {
        Some(name) => name.clone(),
        None => catalog
            .find_by_code(code)
            .map(|account| account.name.clone())
            .unwrap_or_default(),
    };

    let record = Classifier::new(catalog).classify(code, &name);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn run_children(catalog: &Catalog, args: &[String]) -> Result<()> {
    let code = required_code(args)?;
    let children = catalog.children_of(code);

    if children.is_empty() {
        eprintln!("No children under {code}");
    }
    for child in children {
        println!("{}  {}", child.code, child.name);
    }
    Ok(())
}

fn run_path(catalog: &Catalog, args: &[String]) -> Result<()> {
    let code = required_code(args)?;
    println!("{}", path_string(catalog, code));
    Ok(())
}

fn run_export(catalog: &Catalog, format: Option<&str>) -> Result<()> {
    let records = Classifier::new(catalog).classify_all();

    match format.unwrap_or("csv") {
        "csv" => {
            let writer = BufWriter::new(stdout().lock());
            export::write_csv(writer, &records)?;
        }
        "json" => println!("{}", export::to_json(&records)?),
        other => bail!("Unknown export format: {other}. Use csv | json"),
    }
    Ok(())
}

fn print_tree(catalog: &Catalog) {
    println!("📒 Chart of Accounts ({} accounts)", catalog.len());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for root in catalog.roots() {
        print_account(root);
        for account in catalog.descendants_of(&root.code) {
            print_account(account);
        }
    }
}

fn print_account(account: &Account) {
    let indent = "  ".repeat(usize::from(account.level.saturating_sub(1)));
    println!("{indent}{}  {}", account.code, account.name);
}
