// 📊 Vendor Catalog - The authoritative OCR vendor dataset
//
// One ordered pricing list + one detail map keyed by vendor name.
// Everything is a compile-time literal; the catalog never changes after
// construction, so every read accessor is a pure borrow.

use serde::Serialize;
use std::collections::HashMap;

// ============================================================================
// RECORD TYPES
// ============================================================================

/// One OCR provider: display name, price point and differentiator.
///
/// `name` is the unique key joining the pricing list to the detail map.
/// `price` is US$ per 1,000 transactions - comparative only, never computed on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorRecord {
    pub name: String,
    pub price: f64,
    pub focus: String,
}

/// Advantages/disadvantages for one vendor, keyed by vendor name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorDetail {
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

/// A curated cross-vendor takeaway. `text` may mention vendor names as
/// plain text; no structural link to the catalog is maintained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub title: String,
    pub text: String,
}

// ============================================================================
// ERRORS
// ============================================================================

/// The only failure this catalog can produce: a detail lookup for a name
/// that is not in the dataset. After a successful `verify()` this is
/// unreachable for any catalog-derived key.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    NotFound { name: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::NotFound { name } => {
                write!(f, "vendor '{}' is not in the catalog", name)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// One data-integrity violation found by `verify()`.
#[derive(Debug, Clone)]
pub struct IntegrityError {
    pub vendor: String,
    pub message: String,
}

impl std::fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.vendor, self.message)
    }
}

impl std::error::Error for IntegrityError {}

// ============================================================================
// CATALOG
// ============================================================================

/// Holds the literal dataset and exposes read-only accessors.
pub struct VendorCatalog {
    records: Vec<VendorRecord>,
    details: HashMap<String, VendorDetail>,
    highlights: Vec<Highlight>,
}

impl VendorCatalog {
    /// Build the catalog from the literal dataset.
    pub fn new() -> Self {
        VendorCatalog {
            records: default_records(),
            details: default_details(),
            highlights: default_highlights(),
        }
    }

    /// Ordered pricing records. Insertion order, never sorted.
    pub fn vendors(&self) -> &[VendorRecord] {
        &self.records
    }

    /// Pricing record for one vendor, matched by name.
    pub fn record(&self, name: &str) -> Option<&VendorRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Detail entry for one vendor.
    pub fn detail(&self, name: &str) -> Result<&VendorDetail, CatalogError> {
        self.details.get(name).ok_or_else(|| CatalogError::NotFound {
            name: name.to_string(),
        })
    }

    /// The curated highlights, in display order.
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// True if `name` is a selectable vendor key.
    pub fn contains(&self, name: &str) -> bool {
        self.details.contains_key(name)
    }

    /// Data-integrity check, run once at startup.
    ///
    /// Asserts that the detail key set equals the record name set in both
    /// directions and that no price is negative. A violation here means the
    /// literal dataset itself is broken, so callers should fail fast rather
    /// than handle `NotFound` per lookup at render time.
    pub fn verify(&self) -> Result<(), Vec<IntegrityError>> {
        let mut errors = Vec::new();

        for record in &self.records {
            if !self.details.contains_key(&record.name) {
                errors.push(IntegrityError {
                    vendor: record.name.clone(),
                    message: "pricing record has no detail entry".to_string(),
                });
            }
            if record.price < 0.0 {
                errors.push(IntegrityError {
                    vendor: record.name.clone(),
                    message: format!("negative price: {}", record.price),
                });
            }
        }

        let mut seen = std::collections::HashSet::new();
        for record in &self.records {
            if !seen.insert(record.name.as_str()) {
                errors.push(IntegrityError {
                    vendor: record.name.clone(),
                    message: "duplicate vendor name".to_string(),
                });
            }
        }

        for name in self.details.keys() {
            if !self.records.iter().any(|r| &r.name == name) {
                errors.push(IntegrityError {
                    vendor: name.clone(),
                    message: "detail entry has no pricing record".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for VendorCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// LITERAL DATASET
// ============================================================================

fn default_records() -> Vec<VendorRecord> {
    let data = [
        ("Google Vision", 1.5, "Equilíbrio"),
        ("Azure Vision", 1.0, "Mais barato"),
        ("Amazon Textract", 1.5, "Tabelas e Formulários"),
        ("OpenAI Vision", 7.5, "Interpretação + OCR"),
        ("DocuClipper", 30.0, "Focado em Notas Fiscais"),
        ("Klippa", 50.0, "Alta precisão em NF"),
        ("Docsumo", 500.0, "Alta precisão (Enterprise)"),
        ("Mindee", 0.1, "Flexível para Startups"),
    ];

    data.iter()
        .map(|(name, price, focus)| VendorRecord {
            name: name.to_string(),
            price: *price,
            focus: focus.to_string(),
        })
        .collect()
}

fn default_details() -> HashMap<String, VendorDetail> {
    let data: [(&str, &[&str], &[&str]); 8] = [
        (
            "Google Vision",
            &[
                "SDKs oficiais e documentação excelente",
                "Boa precisão em textos comuns",
            ],
            &["Pode falhar em notas fiscais complexas"],
        ),
        (
            "Azure Vision",
            &["Preço mais baixo", "Boa integração no ecossistema Azure"],
            &["Menor precisão em layouts complexos"],
        ),
        (
            "Amazon Textract",
            &["Ótimo em tabelas e formulários", "Alta escalabilidade"],
            &["Custo pode crescer", "Curva de aprendizado no AWS"],
        ),
        (
            "OpenAI Vision",
            &["Interpreta e organiza além do OCR", "Flexibilidade via prompts"],
            &["Custo elevado", "Depende de engenharia de prompt"],
        ),
        (
            "DocuClipper",
            &[
                "Especializado em notas fiscais",
                "Retorna dados estruturados prontos",
            ],
            &["Pouca flexibilidade fora de NF"],
        ),
        (
            "Klippa",
            &["Alta precisão em NF", "Parser pronto para CNPJ, datas e totais"],
            &["Preço mais alto"],
        ),
        (
            "Docsumo",
            &[
                "Altíssima precisão (95%+)",
                "Lida bem com documentos imperfeitos",
            ],
            &["Custo muito alto (Enterprise)"],
        ),
        (
            "Mindee",
            &["APIs pré-treinadas para NF e recibos", "Flexível e adaptável"],
            &["Preço variável conforme volume"],
        ),
    ];

    data.iter()
        .map(|(name, advantages, disadvantages)| {
            (
                name.to_string(),
                VendorDetail {
                    advantages: advantages.iter().map(|s| s.to_string()).collect(),
                    disadvantages: disadvantages.iter().map(|s| s.to_string()).collect(),
                },
            )
        })
        .collect()
}

fn default_highlights() -> Vec<Highlight> {
    let data = [
        ("💲 Melhor Custo", "Azure Vision (US$1 / 1.000 transações)"),
        ("🎯 Mais Preciso em NF", "Klippa / DocuClipper / Docsumo"),
        ("⚖️ Melhor Equilíbrio", "Google Vision"),
        ("📑 Melhor em Tabelas/Formulários", "Amazon Textract"),
        ("🤖 Mais Flexível (OCR + Interpretação)", "OpenAI Vision"),
    ];

    data.iter()
        .map(|(title, text)| Highlight {
            title: title.to_string(),
            text: text.to_string(),
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_passes_integrity_check() {
        let catalog = VendorCatalog::new();
        assert!(catalog.verify().is_ok(), "literal dataset should be consistent");
    }

    #[test]
    fn test_every_record_has_a_detail() {
        let catalog = VendorCatalog::new();
        for record in catalog.vendors() {
            assert!(
                catalog.detail(&record.name).is_ok(),
                "no detail entry for {}",
                record.name
            );
        }
    }

    #[test]
    fn test_vendor_order_is_stable() {
        let catalog = VendorCatalog::new();
        let first: Vec<String> = catalog.vendors().iter().map(|r| r.name.clone()).collect();
        let second: Vec<String> = catalog.vendors().iter().map(|r| r.name.clone()).collect();
        assert_eq!(first, second, "vendors() should be deterministic");
        assert_eq!(first[0], "Google Vision", "insertion order should be preserved");
        assert_eq!(first[7], "Mindee");
    }

    #[test]
    fn test_highlights_are_deterministic() {
        let catalog = VendorCatalog::new();
        assert_eq!(catalog.highlights().len(), 5);
        assert_eq!(catalog.highlights(), catalog.highlights());
        assert_eq!(catalog.highlights()[0].title, "💲 Melhor Custo");
    }

    #[test]
    fn test_azure_vision_detail() {
        let catalog = VendorCatalog::new();
        let detail = catalog.detail("Azure Vision").unwrap();
        assert_eq!(
            detail.advantages,
            vec!["Preço mais baixo", "Boa integração no ecossistema Azure"]
        );
        assert_eq!(detail.disadvantages, vec!["Menor precisão em layouts complexos"]);
    }

    #[test]
    fn test_unknown_vendor_is_not_found() {
        let catalog = VendorCatalog::new();
        let err = catalog.detail("Tesseract").unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound {
                name: "Tesseract".to_string()
            }
        );
    }

    #[test]
    fn test_contains_matches_record_names() {
        let catalog = VendorCatalog::new();
        assert!(catalog.contains("Klippa"));
        assert!(!catalog.contains("Nonexistent Vendor"));
    }
}
