#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};

pub fn create_search_html(detail_id: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <body>
            <ul class="common_sp_list_ul">
                <li class="common_sp_list_li">
                    <div class="common_sp_thumb">
                        <a href="/recipe/{detail_id}" class="common_sp_link"><img src="thumb.jpg"></a>
                    </div>
                </li>
            </ul>
        </body>
        </html>
        "#
    )
}

pub fn create_empty_search_html() -> String {
    r#"<html><body><div class="result_none">검색결과가 없습니다.</div></body></html>"#.to_string()
}

pub fn create_recipe_html(json_ld: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Recipe Page</title>
            <script type="application/ld+json">
                {json_ld}
            </script>
        </head>
        <body>
            <h1>Recipe</h1>
        </body>
        </html>
        "#
    )
}

pub fn recipe_json_ld(ingredients: &[&str], steps: &[&str]) -> String {
    let steps: Vec<_> = steps
        .iter()
        .map(|text| serde_json::json!({ "@type": "HowToStep", "text": text }))
        .collect();
    serde_json::json!({
        "@context": "http://schema.org/",
        "@type": "Recipe",
        "recipeIngredient": ingredients,
        "recipeInstructions": steps,
    })
    .to_string()
}

pub async fn mock_search(server: &mut ServerGuard, name: &str, status: usize, body: String) -> Mock {
    server
        .mock("GET", "/recipe/list.html")
        .match_query(Matcher::UrlEncoded("q".into(), name.into()))
        .with_status(status)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create_async()
        .await
}

pub async fn mock_detail(server: &mut ServerGuard, id: &str, status: usize, body: String) -> Mock {
    server
        .mock("GET", format!("/recipe/{id}").as_str())
        .with_status(status)
        .with_header("content-type", "text/html")
        .with_body(body)
        .create_async()
        .await
}

/// Search result plus detail page for a recipe that scrapes cleanly
pub async fn mock_recipe(
    server: &mut ServerGuard,
    name: &str,
    id: &str,
    ingredients: &[&str],
    steps: &[&str],
) -> (Mock, Mock) {
    let search = mock_search(server, name, 200, create_search_html(id)).await;
    let detail = mock_detail(
        server,
        id,
        200,
        create_recipe_html(&recipe_json_ld(ingredients, steps)),
    )
    .await;
    (search, detail)
}
