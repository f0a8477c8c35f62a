//! Psychometric survey source: one row per user, five OCEAN trait scores.

use super::read_table;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Read;

pub(crate) const INPUT: &str = "psychometric";
const REQUIRED: &[&str] = &["user", "O", "C", "E", "A", "N"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PsychometricRecord {
    pub user: String,
    #[serde(rename = "O")]
    pub openness: f64,
    #[serde(rename = "C")]
    pub conscientiousness: f64,
    #[serde(rename = "E")]
    pub extraversion: f64,
    #[serde(rename = "A")]
    pub agreeableness: f64,
    #[serde(rename = "N")]
    pub neuroticism: f64,
}

pub fn read_psychometric<R: Read>(reader: R) -> Result<Vec<PsychometricRecord>> {
    read_table(reader, INPUT, REQUIRED)
}
