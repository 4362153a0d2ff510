/// `SELECT` for recipes linked to any of a non-empty set of ingredient names.
///
/// Values never enter the SQL text; the builder only emits one numbered
/// placeholder per value and hands the values back for binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLookup {
    names: Vec<String>,
}

impl IngredientLookup {
    /// Build a lookup from a comma separated filter such as `"배추, 소금"`.
    ///
    /// Names are trimmed and blanks dropped; returns `None` when nothing is left.
    pub fn parse(filter: &str) -> Option<Self> {
        let names: Vec<String> = filter
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();
        Self::new(names)
    }

    pub fn new(names: Vec<String>) -> Option<Self> {
        if names.is_empty() {
            None
        } else {
            Some(Self { names })
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// `?1, ?2, ...` for each name
    pub fn placeholders(&self) -> String {
        (1..=self.names.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn sql(&self) -> String {
        format!(
            "SELECT DISTINCT r.id, r.name, r.recipe
             FROM recipes r
             JOIN recipe_ingredients ri ON r.id = ri.recipe_id
             JOIN ingredients i ON i.id = ri.ingredient_id
             WHERE i.name IN ({})
             ORDER BY r.id",
            self.placeholders()
        )
    }
}
