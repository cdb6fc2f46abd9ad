//! Shared fixtures: a small "hero" domain with a key-path resolver and a
//! capability set, plus integer capabilities for the property tests.

use traversal::{CapabilitySet, Outcome, Sequence, Value};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hero {
    pub name: String,
    pub alias: String,
}

impl Hero {
    pub fn new(name: &str, alias: &str) -> Self {
        Hero {
            name: name.to_owned(),
            alias: alias.to_owned(),
        }
    }
}

pub fn roster() -> Sequence {
    Sequence::from_items([
        Value::new(Hero::new("Bruce Wayne", "Batman")),
        Value::new(Hero::new("Selina Kyle", "Catwoman")),
        Value::new(Hero::new("Dick Grayson", "Robin")),
    ])
}

/// Attribute resolution for hero and string items. Unknown paths and foreign
/// item types resolve to absent.
pub fn resolve(item: &Value, path: &str) -> Option<Value> {
    if let Some(hero) = item.downcast_ref::<Hero>() {
        return match path {
            "name" => Some(Value::from(hero.name.clone())),
            "alias" => Some(Value::from(hero.alias.clone())),
            _ => None,
        };
    }
    if let Some(s) = item.downcast_ref::<String>() {
        return match path {
            "length" => Some(Value::new(s.len() as i64)),
            _ => None,
        };
    }
    None
}

pub fn hero_caps() -> CapabilitySet {
    let mut caps = CapabilitySet::new();
    caps.property("first_name", |hero: &Hero| {
        hero.name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_owned()
    });
    caps.test("is_named", 1, |hero: &Hero, args| {
        args.first()
            .and_then(|a| a.downcast_ref::<String>())
            .map_or(false, |name| hero.name.contains(name.as_str()))
    });
    caps
}

pub fn string_caps() -> CapabilitySet {
    let mut caps = CapabilitySet::new();
    caps.property("uppercase", |s: &String| s.to_uppercase());
    caps
}

pub fn int_caps() -> CapabilitySet {
    let mut caps = CapabilitySet::new();
    caps.test("greater_than", 1, |n: &i64, args| {
        args.first()
            .and_then(|a| a.downcast_ref::<i64>())
            .map_or(false, |bound| n > bound)
    });
    caps.register::<i64, _>("negated", 0, |n, _| {
        Outcome::Value(Value::new(n.wrapping_neg()))
    });
    caps
}
