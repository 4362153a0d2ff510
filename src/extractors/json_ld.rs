use crate::error::ExtractError;
use crate::model::RecipeRecord;
use html_escape::decode_html_entities;
use log::debug;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;
use std::convert::TryFrom;

#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    #[serde(rename = "recipeIngredient")]
    recipe_ingredient: Vec<String>,
    #[serde(rename = "recipeInstructions")]
    recipe_instructions: Vec<RecipeInstructionObject>,
}

#[derive(Debug, Deserialize)]
struct RecipeInstructionObject {
    text: String,
}

impl TryFrom<&Value> for JsonLdRecipe {
    type Error = serde_json::Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value.clone())
    }
}

fn decode_html_symbols(text: &str) -> String {
    // some pages escape twice
    decode_html_entities(&decode_html_entities(text)).into_owned()
}

/// Objects inside a JSON-LD block that may describe the recipe
fn candidates(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => match map.get("@graph") {
            Some(Value::Array(items)) => items.iter().collect(),
            _ => vec![value],
        },
        _ => Vec::new(),
    }
}

impl JsonLdRecipe {
    fn into_record(self, name: &str) -> RecipeRecord {
        let ingredients = self
            .recipe_ingredient
            .iter()
            .map(|ing| decode_html_symbols(ing))
            .collect::<Vec<String>>()
            .join(", ");

        let steps = self
            .recipe_instructions
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, decode_html_symbols(&step.text)))
            .collect();

        RecipeRecord {
            name: name.to_string(),
            ingredients,
            steps,
        }
    }
}

/// Decode the recipe embedded as JSON-LD in a detail page.
///
/// `name` is the food name that was searched for; it becomes the record's
/// name regardless of the title the page gives the recipe.
pub fn parse_detail_page(name: &str, detail_markup: &str) -> Result<RecipeRecord, ExtractError> {
    let document = Html::parse_document(detail_markup);
    let selector = Selector::parse("script[type='application/ld+json']")
        .map_err(|e| ExtractError::Malformed(format!("invalid selector: {e}")))?;

    let scripts: Vec<_> = document.select(&selector).collect();
    debug!("Found {} JSON-LD script tags for {}", scripts.len(), name);
    if scripts.is_empty() {
        return Err(ExtractError::NoStructuredData);
    }

    let mut last_error = None;
    for (index, script) in scripts.iter().enumerate() {
        let raw_json = script.inner_html();
        let json_ld = match serde_json::from_str::<Value>(raw_json.trim()) {
            Ok(value) => value,
            Err(e) => {
                debug!("Script {} is not valid JSON: {}", index, e);
                last_error = Some(e.to_string());
                continue;
            }
        };

        for candidate in candidates(&json_ld) {
            match JsonLdRecipe::try_from(candidate) {
                Ok(recipe) => return Ok(recipe.into_record(name)),
                Err(e) => {
                    debug!("Script {} candidate is not a recipe: {}", index, e);
                    last_error = Some(e.to_string());
                }
            }
        }
    }

    Err(ExtractError::Malformed(
        last_error.unwrap_or_else(|| "no recipe object".to_string()),
    ))
}
