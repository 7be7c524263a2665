//! Static ingredient synonym table.
//!
//! Widens search recall by mapping a canonical ingredient name (lowercase) to
//! the alternate terms supermarkets use for it. The table is built once on
//! first use and is read-only afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

static SYNONYMS: LazyLock<HashMap<&'static str, &'static [&'static str]>> = LazyLock::new(|| {
    let mut m: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    m.insert("pollo", &["pollo", "chicken", "pechuga", "muslo"]);
    m.insert("huevo", &["huevo", "huevos", "egg"]);
    m.insert("huevos", &["huevos", "huevo", "egg"]);
    m.insert("leche", &["leche", "milk", "entera", "semidesnatada"]);
    m.insert("arroz", &["arroz", "rice", "redondo", "basmati"]);
    m.insert("pasta", &["pasta", "espagueti", "macarrones", "spaghetti"]);
    m.insert("tomate", &["tomate", "tomates", "tomato"]);
    m.insert("cebolla", &["cebolla", "cebollas", "onion"]);
    m.insert("ajo", &["ajo", "ajos", "garlic"]);
    m.insert("patata", &["patata", "patatas", "potato"]);
    m.insert("aceite", &["aceite", "oliva", "oil"]);
    m.insert("aceite de oliva", &["aceite de oliva", "aceite", "oliva"]);
    m.insert("carne picada", &["carne picada", "picada", "mixta"]);
    m.insert("ternera", &["ternera", "beef", "filete"]);
    m.insert("cerdo", &["cerdo", "lomo", "pork"]);
    m.insert("salmon", &["salmón", "salmon"]);
    m.insert("salmón", &["salmón", "salmon"]);
    m.insert("atun", &["atún", "atun", "tuna"]);
    m.insert("atún", &["atún", "atun", "tuna"]);
    m.insert("queso", &["queso", "cheese", "rallado", "lonchas"]);
    m.insert("yogur", &["yogur", "yogures", "yogurt"]);
    m.insert("mantequilla", &["mantequilla", "butter"]);
    m.insert("pan", &["pan", "barra", "molde", "bread"]);
    m.insert("harina", &["harina", "trigo", "flour"]);
    m.insert("azucar", &["azúcar", "azucar", "sugar"]);
    m.insert("azúcar", &["azúcar", "azucar", "sugar"]);
    m.insert("sal", &["sal", "salt"]);
    m.insert("lechuga", &["lechuga", "iceberg", "romana"]);
    m.insert("zanahoria", &["zanahoria", "zanahorias", "carrot"]);
    m.insert("pimiento", &["pimiento", "pimientos", "pepper"]);
    m.insert("limon", &["limón", "limones", "lemon"]);
    m.insert("limón", &["limón", "limones", "lemon"]);
    m.insert("platano", &["plátano", "platano", "banana"]);
    m.insert("plátano", &["plátano", "platano", "banana"]);
    m.insert("manzana", &["manzana", "manzanas", "apple"]);
    m.insert("garbanzos", &["garbanzos", "garbanzo", "chickpeas"]);
    m.insert("lentejas", &["lentejas", "lenteja", "lentils"]);
    m
});

/// Alternate search terms for an ingredient, if the table knows it
///
/// The lookup key is trimmed and lowercased.
pub fn synonyms_for(ingredient: &str) -> Option<&'static [&'static str]> {
    SYNONYMS.get(ingredient.trim().to_lowercase().as_str()).copied()
}

/// Search terms to try for an ingredient: its synonyms, or the name itself
pub fn search_terms(ingredient: &str) -> Vec<&str> {
    match synonyms_for(ingredient) {
        Some(terms) => terms.to_vec(),
        None => vec![ingredient],
    }
}
