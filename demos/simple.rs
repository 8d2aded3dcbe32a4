//! Decoding and encoding a nested record.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use wirebind::{from_str, to_string_pretty, wire_enum, wire_record, Dict, Timestamp};

wire_enum! {
    pub enum Role {
        Admin = "admin",
        Member = "member",
    }
}

wire_record! {
    pub struct Member {
        required id: u32 = "id",
        required display_name: String = "display_name",
        required role: Role = "role",
        nullable joined_at: Timestamp = "joined_at",
    }
}

wire_record! {
    pub struct Team {
        required name: String = "name",
        required members: Vec<Member> = "members",
        required channels: Dict<Vec<String>> = "channels",
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let text = r##"{
        "name": "platform",
        "members": [
            {"id": 1, "display_name": "Alice", "role": "admin", "joined_at": 1600000000},
            {"id": 2, "display_name": "Bob", "role": "owner", "joined_at": null}
        ],
        "channels": {"alerts": ["#oncall"], "chat": []},
        "archived": false
    }"##;

    let team: Team = from_str(text)?;
    println!("Decoded: {:#?}\n", team);

    // "owner" is not a known role.
    assert_eq!(team.members[1].role, Role::Null);

    println!("Re-encoded:\n{}", to_string_pretty(&team)?);
    Ok(())
}
