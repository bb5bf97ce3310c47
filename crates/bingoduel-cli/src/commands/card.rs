use bingoduel_core::Card;
use bingoduel_generator::{CardGenerator, CardLayout, CardSeed, GeneratedCard};
use serde::Serialize;

use super::print_indented;
use crate::error::CliError;

#[derive(Debug, clap::Args)]
pub(crate) struct CardArgs {
    /// Value layout of the card.
    #[arg(long, value_name = "LAYOUT", default_value_t = CardLayout::Permutation25)]
    pub(crate) layout: CardLayout,

    /// Seed to regenerate a card from, as 64 hex digits.
    #[arg(long, value_name = "HEX")]
    seed: Option<CardSeed>,

    /// Print the card as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CardReport<'a> {
    layout: &'static str,
    seed: String,
    card: &'a Card,
}

pub(crate) fn run(args: &CardArgs) -> Result<(), CliError> {
    let generator = CardGenerator::new(args.layout);
    let generated = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    if args.json {
        let report = CardReport {
            layout: generator.layout().name(),
            seed: generated.seed.to_string(),
            card: &generated.card,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_card(&generator, &generated);
    }
    Ok(())
}

fn print_card(generator: &CardGenerator, generated: &GeneratedCard) {
    println!("Layout:");
    println!("  {}", generator.layout());
    println!();
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Card:");
    print_indented(&generated.card.to_string());
}
