//! Simple decoder to inspect vocabulary documents.

use std::fs;

use vocab_wire::{decode_entity_str, encode_entity_string, Entity, PropertySlot, Registry};

fn describe_slot(name: &str, slot: &PropertySlot) {
    match slot {
        PropertySlot::Functional(slot) => {
            if let Some(value) = slot.get() {
                println!("  {} = {:?}", name, value);
            }
        }
        PropertySlot::Repeated(slot) => {
            if !slot.is_empty() {
                println!("  {} ({} occurrences)", name, slot.len());
                for value in slot.iter().take(5) {
                    println!("    - {:?}", value);
                }
                if slot.len() > 5 {
                    println!("    ... and {} more", slot.len() - 5);
                }
            }
        }
        PropertySlot::LanguageMap(slot) => {
            if !slot.is_empty() {
                println!("  {} ({} languages)", name, slot.len());
                for (tag, text) in slot.iter() {
                    println!("    {}: {}", tag, text);
                }
            }
        }
    }
}

fn describe(entity: &Entity) {
    println!("\n=== Entity ===");
    println!("Schema: {}", entity.schema().name());
    if let Some(id) = entity.id() {
        println!("Id: {}", id);
    }
    if !entity.type_names().is_empty() {
        println!("Types: {}", entity.type_names().join(", "));
    }

    println!("\n=== Declared properties ===");
    for spec in entity.schema().properties() {
        if let Some(slot) = entity.slot(&spec.name) {
            describe_slot(&spec.name, slot);
        }
    }

    if !entity.unknown_fields().is_empty() {
        println!("\n=== Unrecognized fields ===");
        for (key, value) in entity.unknown_fields() {
            println!("  {} = {}", key, value);
        }
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("usage: parse_document <file.json>");

    println!("Reading: {}", path);
    let data = fs::read_to_string(&path).expect("Failed to read file");

    let registry = Registry::core();
    let entity = decode_entity_str(&registry, &data).expect("Failed to decode");
    describe(&entity);

    let reserialized = encode_entity_string(&entity).expect("Failed to encode");
    println!("\n=== Re-serialized ===");
    println!("{}", reserialized);
}
