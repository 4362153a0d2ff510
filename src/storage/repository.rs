use super::query::IngredientLookup;
use super::schema::init_schema;
use crate::config::FinderConfig;
use crate::error::StorageError;
use crate::ingredients::{parse_ingredient, split_ingredient_lines};
use crate::model::{RecipeRecord, RecipeSummary, TableCounts};
use log::{debug, info};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Transaction};
use std::path::{Path, PathBuf};

/// What `ingest` did with a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStatus {
    Stored { recipe_id: i64, links: usize },
    /// A recipe with the same name was already stored; nothing was written
    AlreadyPresent,
}

/// SQLite-backed store of recipes and their ingredient links.
///
/// Every operation opens its own connection, so a `Repository` is only a path.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Open (creating if needed) the database at `path` and make sure the schema exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let repository = Self {
            path: path.as_ref().to_path_buf(),
        };
        let conn = repository.connect()?;
        init_schema(&conn)?;
        Ok(repository)
    }

    pub fn from_config(config: &FinderConfig) -> Result<Self, StorageError> {
        Self::open(&config.database_path)
    }

    fn connect(&self) -> Result<Connection, StorageError> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Store a scraped recipe with its ingredient and quantity tokens.
    ///
    /// A recipe whose name is already stored is skipped untouched. Everything
    /// for one recipe is written in a single transaction.
    pub fn ingest(&self, record: &RecipeRecord) -> Result<IngestStatus, StorageError> {
        if record.name.trim().is_empty() {
            return Err(StorageError::EmptyRecipeName);
        }

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT id FROM recipes WHERE name = ?1",
                params![record.name],
                |row| row.get(0),
            )
            .optional()?;
        if existing.is_some() {
            info!("[{}] already stored, skipping", record.name);
            return Ok(IngestStatus::AlreadyPresent);
        }

        tx.execute(
            "INSERT INTO recipes (name, recipe) VALUES (?1, ?2)",
            params![record.name, record.steps.join("\n")],
        )?;
        let recipe_id = tx.last_insert_rowid();

        let mut links = 0;
        for line in split_ingredient_lines(&record.ingredients) {
            let parsed = parse_ingredient(line);
            link_token(&tx, recipe_id, parsed.name())?;
            links += 1;

            if let Some(amount) = parsed.amount() {
                link_token(&tx, recipe_id, amount)?;
                links += 1;
            }
        }

        tx.commit()?;
        info!("[{}] stored with {} ingredient links", record.name, links);
        Ok(IngestStatus::Stored { recipe_id, links })
    }

    /// Recipes linked to ANY of the comma separated ingredient names
    pub fn lookup(&self, filter: &str) -> Result<Vec<RecipeSummary>, StorageError> {
        let Some(lookup) = IngredientLookup::parse(filter) else {
            return Ok(Vec::new());
        };
        debug!("Looking up recipes for {:?}", lookup.names());

        let conn = self.connect()?;
        let mut stmt = conn.prepare(&lookup.sql())?;
        let rows = stmt.query_map(params_from_iter(lookup.names()), |row| {
            Ok(RecipeSummary {
                name: row.get(1)?,
                recipe: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            })
        })?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// A single recipe by exact name, `None` if it was never stored
    pub fn get_by_name(&self, name: &str) -> Result<Option<RecipeSummary>, StorageError> {
        let conn = self.connect()?;
        let summary = conn
            .query_row(
                "SELECT name, recipe FROM recipes WHERE name = ?1",
                params![name],
                |row| {
                    Ok(RecipeSummary {
                        name: row.get(0)?,
                        recipe: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    })
                },
            )
            .optional()?;
        Ok(summary)
    }

    pub fn counts(&self) -> Result<TableCounts, StorageError> {
        let conn = self.connect()?;
        let count = |table: &str| -> Result<u64, StorageError> {
            let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
            Ok(n as u64)
        };

        Ok(TableCounts {
            recipes: count("recipes")?,
            ingredients: count("ingredients")?,
            recipe_ingredients: count("recipe_ingredients")?,
        })
    }
}

/// Insert the ingredient row if missing and link it to the recipe
fn link_token(tx: &Transaction<'_>, recipe_id: i64, token: &str) -> Result<(), StorageError> {
    tx.execute(
        "INSERT OR IGNORE INTO ingredients (name) VALUES (?1)",
        params![token],
    )?;
    let ingredient_id: i64 = tx.query_row(
        "SELECT id FROM ingredients WHERE name = ?1",
        params![token],
        |row| row.get(0),
    )?;
    tx.execute(
        "INSERT INTO recipe_ingredients (recipe_id, ingredient_id) VALUES (?1, ?2)",
        params![recipe_id, ingredient_id],
    )?;
    Ok(())
}
