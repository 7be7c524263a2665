use crate::models::CatalogProduct;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a catalog registry
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid catalog format: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Catalog registry has no supermarkets")]
    Empty,
}

/// Source of supermarket catalogs the matcher searches
pub trait CatalogSource: Send + Sync {
    /// Products offered by a supermarket, `None` when unknown
    fn products(&self, supermarket_id: &str) -> Option<&[CatalogProduct]>;

    /// Ids of every known supermarket, in ascending order
    fn supermarkets(&self) -> Vec<&str>;
}

/// In-memory catalog registry keyed by lowercase supermarket id
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    catalogs: BTreeMap<String, Vec<CatalogProduct>>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the catalog of a supermarket
    pub fn insert(&mut self, supermarket_id: &str, products: Vec<CatalogProduct>) {
        self.catalogs.insert(normalize_id(supermarket_id), products);
    }

    pub fn with_catalog(mut self, supermarket_id: &str, products: Vec<CatalogProduct>) -> Self {
        self.insert(supermarket_id, products);
        self
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Parse a registry from JSON of the form `{ "<id>": [product, ...] }`
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, Vec<CatalogProduct>> = serde_json::from_str(json)?;
        if raw.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut registry = Self::new();
        for (id, products) in raw {
            registry.insert(&id, products);
        }
        Ok(registry)
    }

    /// Load a registry from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = tokio::fs::read_to_string(path.as_ref()).await?;
        let registry = Self::from_json_str(&json)?;

        tracing::debug!(
            "Loaded {} catalogs from {}",
            registry.len(),
            path.as_ref().display()
        );

        Ok(registry)
    }

    /// Mock catalogs bundled with the service
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (id, rows) in BUILTIN_CATALOGS {
            let products = rows
                .iter()
                .map(|(name, price, image)| CatalogProduct::new(*name, *price, *image))
                .collect();
            registry.insert(id, products);
        }
        registry
    }
}

impl CatalogSource for CatalogRegistry {
    fn products(&self, supermarket_id: &str) -> Option<&[CatalogProduct]> {
        self.catalogs
            .get(&normalize_id(supermarket_id))
            .map(Vec::as_slice)
            .filter(|products| !products.is_empty())
    }

    fn supermarkets(&self) -> Vec<&str> {
        self.catalogs.keys().map(String::as_str).collect()
    }
}

#[inline]
fn normalize_id(supermarket_id: &str) -> String {
    supermarket_id.trim().to_lowercase()
}

type CatalogRow = (&'static str, &'static str, &'static str);

const BUILTIN_CATALOGS: &[(&str, &[CatalogRow])] = &[
    ("carrefour", CARREFOUR),
    ("dia", DIA),
    ("lidl", LIDL),
    ("mercadona", MERCADONA),
];

const CARREFOUR: &[CatalogRow] = &[
    ("Pechuga de Pollo Fileteada Carrefour 400g", "4,29 €", "https://placehold.co/200x200?text=Pollo"),
    ("Huevos Frescos Clase M Carrefour 12 uds", "2,65 €", "https://placehold.co/200x200?text=Huevos"),
    ("Leche Entera Carrefour 1L", "0,95 €", "https://placehold.co/200x200?text=Leche"),
    ("Arroz Redondo Carrefour 1kg", "1,35 €", "https://placehold.co/200x200?text=Arroz"),
    ("Espagueti Carrefour 500g", "0,79 €", "https://placehold.co/200x200?text=Pasta"),
    ("Tomate Pera Granel 1kg", "2,19 €", "https://placehold.co/200x200?text=Tomate"),
    ("Cebolla Malla 2kg", "1,99 €", "https://placehold.co/200x200?text=Cebolla"),
    ("Ajo Morado Malla 250g", "1,49 €", "https://placehold.co/200x200?text=Ajo"),
    ("Patatas Malla Carrefour 3kg", "3,29 €", "https://placehold.co/200x200?text=Patatas"),
    ("Aceite de Oliva Virgen Extra Carrefour 1L", "8,95 €", "https://placehold.co/200x200?text=Aceite"),
    ("Queso Rallado Mozzarella Carrefour 200g", "1,85 €", "https://placehold.co/200x200?text=Queso"),
    ("Salmón Fresco Lomos 250g", "5,49 €", "https://placehold.co/200x200?text=Salmon"),
];

const DIA: &[CatalogRow] = &[
    ("Contramuslos de Pollo Dia 600g", "3,59 €", "https://placehold.co/200x200?text=Pollo"),
    ("Huevos Camperos Dia 6 uds", "1,99 €", "https://placehold.co/200x200?text=Huevos"),
    ("Leche Semidesnatada Dia 1L", "0,89 €", "https://placehold.co/200x200?text=Leche"),
    ("Arroz Largo Dia 1kg", "1,19 €", "https://placehold.co/200x200?text=Arroz"),
    ("Macarrones Dia 500g", "0,69 €", "https://placehold.co/200x200?text=Pasta"),
    ("Tomate Triturado Dia 400g", "0,65 €", "https://placehold.co/200x200?text=Tomate"),
    ("Cebollas Dia 1kg", "1,29 €", "https://placehold.co/200x200?text=Cebolla"),
    ("Aceite de Girasol Dia 1L", "2,15 €", "https://placehold.co/200x200?text=Aceite"),
    ("Atún Claro en Aceite de Oliva Dia Pack 3", "2,99 €", "https://placehold.co/200x200?text=Atun"),
];

const LIDL: &[CatalogRow] = &[
    ("Pechuga de Pollo Entera 1kg", "6,49 €", "https://placehold.co/200x200?text=Pollo"),
    ("Huevos Clase L 12 uds", "2,79 €", "https://placehold.co/200x200?text=Huevos"),
    ("Leche Entera Milbona 1L", "0,92 €", "https://placehold.co/200x200?text=Leche"),
    ("Arroz Basmati Golden Sun 1kg", "1,89 €", "https://placehold.co/200x200?text=Arroz"),
    ("Tomates Cherry 500g", "1,69 €", "https://placehold.co/200x200?text=Tomate"),
    ("Carne Picada Mixta Vacuno y Cerdo 500g", "3,39 €", "https://placehold.co/200x200?text=Carne"),
    ("Yogur Natural Milbona Pack 6", "1,15 €", "https://placehold.co/200x200?text=Yogur"),
    ("Mantequilla Milbona 250g", "2,29 €", "https://placehold.co/200x200?text=Mantequilla"),
    ("Pan de Molde Integral 460g", "1,09 €", "https://placehold.co/200x200?text=Pan"),
];

const MERCADONA: &[CatalogRow] = &[
    ("Filetes de Pechuga de Pollo Hacendado 500g", "4,60 €", "https://placehold.co/200x200?text=Pollo"),
    ("Huevos Grandes Hacendado 12 uds", "2,55 €", "https://placehold.co/200x200?text=Huevos"),
    ("Leche Entera Hacendado 1L", "0,97 €", "https://placehold.co/200x200?text=Leche"),
    ("Arroz Redondo Hacendado 1kg", "1,30 €", "https://placehold.co/200x200?text=Arroz"),
    ("Espaguetis Hacendado 1kg", "1,40 €", "https://placehold.co/200x200?text=Pasta"),
    ("Tomate Rama 1kg", "2,35 €", "https://placehold.co/200x200?text=Tomate"),
    ("Cebolla Dulce 1kg", "1,75 €", "https://placehold.co/200x200?text=Cebolla"),
    ("Patata Lavada 3kg", "3,45 €", "https://placehold.co/200x200?text=Patata"),
    ("Aceite de Oliva Virgen Extra Hacendado 1L", "8,75 €", "https://placehold.co/200x200?text=Aceite"),
    ("Lomo de Cerdo Fileteado 500g", "3,95 €", "https://placehold.co/200x200?text=Cerdo"),
    ("Lechuga Iceberg", "0,99 €", "https://placehold.co/200x200?text=Lechuga"),
    ("Zanahorias Bolsa 1kg", "0,99 €", "https://placehold.co/200x200?text=Zanahoria"),
];
