//! Tokens on the board.
//!
//! A [`Token`] is the in-session view of an entity row: coerced position,
//! sanitized footprint and speed. Tokens live in a [`TokenStore`] that
//! preserves load order for rendering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use battlemat_core::GridPoint;
use battlemat_store::EntityRecord;

/// One token on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Entity id in the store.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Top-left cell the token occupies.
    pub position: GridPoint,
    /// Side length of the occupied square, in cells. At least 1.
    pub footprint_cells: i32,
    /// Movement speed in feet. Zero when unknown.
    pub speed_feet: f64,
    /// Relative path of the portrait image, if any.
    pub image: Option<String>,
}

impl From<&EntityRecord> for Token {
    fn from(record: &EntityRecord) -> Self {
        let (x, y) = record.position();
        Self {
            id: record.id_entity,
            name: record.name.clone(),
            position: GridPoint::new(x, y),
            footprint_cells: record.footprint_cells(),
            speed_feet: record.speed_feet(),
            image: record.image.clone(),
        }
    }
}

/// Token collection keyed by entity id, iterated in load order.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    tokens: HashMap<i64, Token>,
    order: Vec<i64>,
}

impl TokenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens held.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when no tokens are held.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Inserts or replaces a token. A replaced token keeps its original
    /// position in the iteration order.
    pub fn insert(&mut self, token: Token) {
        if !self.tokens.contains_key(&token.id) {
            self.order.push(token.id);
        }
        self.tokens.insert(token.id, token);
    }

    /// Looks up a token by id.
    pub fn get(&self, id: i64) -> Option<&Token> {
        self.tokens.get(&id)
    }

    /// Looks up a token mutably by id.
    pub fn get_mut(&mut self, id: i64) -> Option<&mut Token> {
        self.tokens.get_mut(&id)
    }

    /// Removes a token by id.
    pub fn remove(&mut self, id: i64) -> Option<Token> {
        self.order.retain(|&i| i != id);
        self.tokens.remove(&id)
    }

    /// Iterates tokens in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.order.iter().filter_map(|id| self.tokens.get(id))
    }

    /// Drops all tokens.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.order.clear();
    }

    /// Replaces the contents with tokens materialized from entity rows.
    pub fn load_records(&mut self, records: &[EntityRecord]) {
        self.clear();
        for record in records {
            self.insert(Token::from(record));
        }
    }
}
