//! # Acme Basket Demo
//!
//! Command line demonstration of the basket engine.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Demo Flow                                  │
//! │                                                                     │
//! │  Scripted cases ──► four example baskets vs expected totals         │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  Interactive prompt ──► add codes, `total`, `items`, `clear`,       │
//! │                         `quit`                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};

use basket_core::{Basket, BasketFactory, Money};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// The four example baskets with their expected totals.
const SCRIPTED_CASES: [(&[&str], Money); 4] = [
    (&["B01", "G01"], Money::from_cents(3785)),
    (&["R01", "R01"], Money::from_cents(5437)),
    (&["R01", "G01"], Money::from_cents(6085)),
    (
        &["B01", "B01", "R01", "R01", "R01"],
        Money::from_cents(9827),
    ),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting Acme basket demo");

    let factory = BasketFactory::new();

    println!("Acme Widget Co - Basket Demo");
    println!("============================");
    println!();
    println!("Active offers:");
    for description in factory.offer_descriptions() {
        println!("  - {description}");
    }
    println!();

    run_scripted_cases(&factory)?;
    run_interactive(&factory)?;

    info!("Demo finished");
    Ok(())
}

/// Runs the example baskets and reports calculated vs expected totals.
fn run_scripted_cases(factory: &BasketFactory) -> Result<(), Box<dyn std::error::Error>> {
    for (index, (codes, expected)) in SCRIPTED_CASES.iter().enumerate() {
        let mut basket = factory.create_basket();
        for code in *codes {
            basket.add(code)?;
        }
        let total = basket.total()?;

        println!("Test Case {}", index + 1);
        println!("Products: {}", codes.join(", "));
        println!("Calculated Total: ${total}");
        println!("Expected Total: ${expected}");
        println!(
            "Status: {}",
            if total == *expected { "PASS" } else { "FAIL" }
        );
        println!();
    }

    Ok(())
}

/// Interactive mode: one basket, commands and product codes on stdin.
fn run_interactive(factory: &BasketFactory) -> io::Result<()> {
    println!("Interactive Mode - Enter product codes (R01, G01, B01), or one of");
    println!("`total`, `items`, `clear`, `quit`:");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut basket = factory.create_basket();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        match input.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "total" => print_totals(&basket),
            "items" => print_items(&basket),
            "clear" => {
                basket.clear();
                println!("Basket cleared");
            }
            _ => match basket.add(input) {
                Ok(()) => println!("Added {input}"),
                Err(err) => {
                    warn!(code = input, "rejected product code");
                    println!("{err}");
                }
            },
        }
    }

    Ok(())
}

fn print_totals(basket: &Basket) {
    match basket.totals() {
        Ok(totals) => {
            println!("Subtotal: ${}", totals.subtotal);
            println!("Discount: -${}", totals.discount);
            println!("Delivery: ${}", totals.delivery);
            println!("Total:    ${}", totals.total);
        }
        Err(err) => {
            warn!(error = %err, "pricing failed");
            println!("{err}");
        }
    }
}

fn print_items(basket: &Basket) {
    let items = basket.items();
    if items.is_empty() {
        println!("Basket is empty");
        return;
    }
    for (code, quantity) in items {
        println!("{code} x{quantity}");
    }
}
