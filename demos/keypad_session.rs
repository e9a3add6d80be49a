//! A simulated keypad session driving the color engine.
//!
//! Run with: cargo run --example keypad_session

use hexpad::pipeline::{resolve_fn, ColorEngine};
use hexpad::{NameState, Update};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A tiny offline stand-in for a color name service.
    let resolver = resolve_fn(|hex| async move {
        let name = match hex.as_str() {
            "#ff0000" => "Red",
            "#00ff00" => "Green",
            "#0000ff" => "Blue",
            "#c0ffee" => "Caffeinated Mint",
            _ => "Unnamed",
        };
        Ok(name.to_string())
    });

    let (engine, mut updates) = ColorEngine::builder().resolver(resolver).build()?;

    let printer = tokio::spawn(async move {
        while let Some(update) = updates.recv().await {
            match update {
                Update::HexText(text) => println!("  hex  {text}"),
                Update::Background(color) => println!("  bg   #{:06x}", color.packed()),
                Update::RgbString(rgb) => println!("  rgb  {rgb}"),
                Update::ColorName(NameState::Failed(err)) => println!("  name <{err}>"),
                Update::ColorName(name) => println!("  name {name}"),
            }
        }
    });

    println!("typing 'c0ffee':");
    for ch in "c0ffee".chars() {
        engine.on_digit(ch)?;
        sleep(Duration::from_millis(50)).await;
    }

    println!("pressing back twice:");
    engine.on_back();
    engine.on_back();
    sleep(Duration::from_millis(50)).await;

    println!("pressing a non-hex key:");
    if let Err(err) = engine.on_digit('x') {
        println!("  rejected: {err}");
    }

    println!("pressing clear:");
    engine.on_clear();
    sleep(Duration::from_millis(50)).await;

    println!("final state: {}", engine.current());

    engine.teardown();
    printer.await?;
    Ok(())
}
