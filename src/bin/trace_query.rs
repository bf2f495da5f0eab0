/// Query Tracer - Shows the flow through Query → Tokens → Cleaned values
///
/// Usage: cargo run --bin trace_query '<query>'
use search_syntax::{clean_filter_value, tokenize, FieldTable};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --bin trace_query '<query>'");
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --bin trace_query 'status:unresolved transaction.duration:>500'");
        std::process::exit(1);
    }

    let query = &args[1];
    let fields = FieldTable::builtin();

    println!("╔═══════════════════════════════════════════════════════════════");
    println!("║ SEARCH QUERY TRACER");
    println!("╚═══════════════════════════════════════════════════════════════\n");

    println!("📝 INPUT QUERY:");
    println!("{query}");
    println!();

    let tokens = tokenize(query, &fields);

    println!("🔍 TOKEN STREAM:");
    println!("─────────────────────────────────────────────────────────────");
    match serde_json::to_string_pretty(&tokens) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("❌ Failed to serialize tokens: {e}");
            std::process::exit(1);
        }
    }
    println!();

    println!("🧹 CLEANED FILTER VALUES:");
    println!("─────────────────────────────────────────────────────────────");
    for token in &tokens {
        let Some(filter) = token.filter() else {
            continue;
        };
        let Some(raw_value) = filter.value.as_single() else {
            println!("{}: [list value, cleaned per item by the caller]", filter.key);
            continue;
        };
        match clean_filter_value(raw_value, Some(filter.value_type), Some(filter)) {
            Some(cleaned) => println!(
                "{}:{} → {} ({:?})",
                filter.key, raw_value, cleaned, filter.value_type
            ),
            None => println!(
                "{}:{} → rejected for {:?}",
                filter.key, raw_value, filter.value_type
            ),
        }
    }
}
