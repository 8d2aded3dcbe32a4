//! Building sparse update payloads with partial fields.
//!
//! Run with: RUST_LOG=wirebind=trace cargo run --example partial_records

use std::error::Error;
use tracing_subscriber::EnvFilter;
use wirebind::{from_str, to_string, wire_record, Record};

wire_record! {
    /// Fields a client may change on a profile.
    pub struct ProfileUpdate {
        required user_id: u64 = "user_id",
        partial display_name: String = "display_name",
        partial bio: String = "bio",
        partial age: u32 = "age",
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut update = ProfileUpdate {
        user_id: 7,
        ..Default::default()
    };
    println!("Fresh:         {}", to_string(&update)?);

    update.display_name.set("Alice".to_string());
    println!("Renamed:       {}", to_string(&update)?);

    update.bio.set_null();
    println!("Bio cleared:   {}", to_string(&update)?);
    println!("Assigned keys: {:?}\n", update.assigned_keys());

    // Absent keys stay absent after a round trip.
    let received: ProfileUpdate = from_str(r#"{"user_id": 9, "age": 31}"#)?;
    println!("Received:      {}", to_string(&received)?);
    assert!(!received.display_name.is_present());

    let copy = received.clone();
    assert_eq!(copy.assigned_keys(), vec!["age"]);
    Ok(())
}
