use log::error;
use recipe_finder::{find_recipes, ingest_menu, FinderConfig, FinderError, Repository};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "recipe-finder <ingest [menu-file] | search <ingredients> | show <name> | stats>";

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(env::args().skip(1).collect()).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Vec<String>) -> Result<ExitCode, FinderError> {
    let command = args.first().ok_or_else(|| FinderError::Usage(USAGE.to_string()))?;
    let mut config = FinderConfig::load()?;

    match command.as_str() {
        "ingest" => {
            if let Some(menu_path) = args.get(1) {
                config.menu_path = PathBuf::from(menu_path);
            }
            let failures = ingest_menu(&config).await?;

            if failures.is_empty() {
                Ok(ExitCode::SUCCESS)
            } else {
                println!(
                    "{} failed, see {}",
                    failures.len(),
                    config.failures_path.display()
                );
                Ok(ExitCode::from(2))
            }
        }
        "search" => {
            let filter = args.get(1).map(String::as_str).unwrap_or_default();
            for recipe in find_recipes(&config, filter)? {
                println!("# {}\n{}\n", recipe.name, recipe.recipe);
            }
            Ok(ExitCode::SUCCESS)
        }
        "show" => {
            let name = args
                .get(1)
                .ok_or_else(|| FinderError::Usage(USAGE.to_string()))?;
            match Repository::from_config(&config)?.get_by_name(name)? {
                Some(recipe) => {
                    println!("# {}\n{}", recipe.name, recipe.recipe);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    println!("{name} 레시피를 찾을 수 없습니다.");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        "stats" => {
            let counts = Repository::from_config(&config)?.counts()?;
            println!(
                "recipes: {}\ningredients: {}\nrecipe_ingredients: {}",
                counts.recipes, counts.ingredients, counts.recipe_ingredients
            );
            Ok(ExitCode::SUCCESS)
        }
        _ => Err(FinderError::Usage(USAGE.to_string())),
    }
}
