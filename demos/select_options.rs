//! Rendering enum variants as UI select options.
//!
//! Run with: cargo run --example select_options

use wirebind::{select_options_json, wire_enum, OptionKey, OptionLabels, WireEnum};

wire_enum! {
    pub enum Priority: "Ticket priority" {
        Low = "low" => "Whenever",
        Normal = "normal" => "This week",
        Urgent = "urgent" => "Right now",
        Unsorted = "unsorted",
    }
}

fn main() {
    println!("{}:", Priority::DESCRIPTION);
    for option in Priority::options() {
        println!("  {} {:<9} {}", option.ordinal, option.tag, option.description);
    }

    println!("\nDefault labels:");
    println!("{}", select_options_json::<Priority>(&OptionLabels::default()));

    println!("\nCustom labels keyed by tag:");
    let labels = OptionLabels::new("id", "label").with_key(OptionKey::Tag);
    println!("{}", select_options_json::<Priority>(&labels));
}
