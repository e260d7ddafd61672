//! Print SVG path data for a few typical block outlines.
//!
//! Run with `RUST_LOG=debug cargo run --example outline --features tracing`
//! to see each connector being drawn. `RUST_LOG=info` shows one summary line
//! per block.

use blocknotch::{
    Outline, PathSink, STATEMENT_INPUT_BOTTOM_HEIGHT, STATEMENT_INPUT_INDENT_WIDTH,
    add_next_connector, add_output_connector, add_previous_connector,
    add_statement_input_connector, add_value_input_connector, pt,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut statement = Outline::starting_at(pt(0, 0));
    add_previous_connector(&mut statement, 0, 0);
    statement.line_to(pt(200, 0));
    add_value_input_connector(&mut statement, 200, 0);
    statement.line_to(pt(200, 100));
    add_next_connector(&mut statement, 0, 100);
    statement.line_to(pt(0, 100));
    statement.close();
    tracing::info!(commands = statement.len(), "statement block");
    println!("statement: {statement}");

    let mut value = Outline::starting_at(pt(0, 0));
    value.line_to(pt(120, 0));
    value.line_to(pt(120, 80));
    value.line_to(pt(0, 80));
    add_output_connector(&mut value, 0, 0);
    value.close();
    tracing::info!(commands = value.len(), "value block");
    println!("value:     {value}");

    let x_offset = 40;
    let right = x_offset + STATEMENT_INPUT_INDENT_WIDTH;
    let bottom = 40 + 80 + STATEMENT_INPUT_BOTTOM_HEIGHT;
    let mut wrapper = Outline::starting_at(pt(0, 0));
    add_previous_connector(&mut wrapper, 0, 0);
    wrapper.line_to(pt(right, 0));
    add_statement_input_connector(&mut wrapper, right, 40, x_offset, 80);
    wrapper.line_to(pt(right, bottom));
    add_next_connector(&mut wrapper, 0, bottom);
    wrapper.line_to(pt(0, bottom));
    wrapper.close();
    tracing::info!(commands = wrapper.len(), "wrapper block");
    println!("wrapper:   {wrapper}");
}
