pub mod commands;
pub mod state;

pub fn run_demo() -> anyhow::Result<()> {
    let cards = commands::demo_cards();
    println!("{}", serde_json::to_string_pretty(&cards)?);
    Ok(())
}
