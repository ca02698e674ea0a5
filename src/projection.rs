// 📈 View Projections - catalog state mapped into view-ready shapes
//
// Pure field selection only. No binning, scaling or currency conversion
// happens here; that belongs to the rendering collaborator.

use crate::catalog::{CatalogError, Highlight, VendorCatalog, VendorRecord};
use serde::Serialize;

/// One bar of the price chart: vendor name and raw price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Everything the detail view needs for one vendor, joined by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPayload {
    pub name: String,
    pub focus: String,
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
}

/// Ordered chart series, one point per record, order preserved.
pub fn chart_series(records: &[VendorRecord]) -> Vec<ChartPoint> {
    records
        .iter()
        .map(|r| ChartPoint {
            label: r.name.clone(),
            value: r.price,
        })
        .collect()
}

/// Join the pricing record and detail entry for `name`.
pub fn detail_payload(name: &str, catalog: &VendorCatalog) -> Result<DetailPayload, CatalogError> {
    let record = catalog.record(name).ok_or_else(|| CatalogError::NotFound {
        name: name.to_string(),
    })?;
    let detail = catalog.detail(name)?;

    Ok(DetailPayload {
        name: record.name.clone(),
        focus: record.focus.clone(),
        advantages: detail.advantages.clone(),
        disadvantages: detail.disadvantages.clone(),
    })
}

/// Identity passthrough. Exists so every view reads from this layer.
pub fn highlight_cards(highlights: &[Highlight]) -> &[Highlight] {
    highlights
}

/// Assemble all three view models into one JSON document, in catalog order.
/// This is what `export` mode prints.
pub fn export_document(catalog: &VendorCatalog) -> Result<serde_json::Value, CatalogError> {
    let details = catalog
        .vendors()
        .iter()
        .map(|r| detail_payload(&r.name, catalog))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(serde_json::json!({
        "chart": chart_series(catalog.vendors()),
        "details": details,
        "highlights": highlight_cards(catalog.highlights()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_series_mirrors_records() {
        let catalog = VendorCatalog::new();
        let records = catalog.vendors();
        let series = chart_series(records);

        assert_eq!(series.len(), records.len());
        for (point, record) in series.iter().zip(records) {
            assert_eq!(point.label, record.name);
            assert_eq!(point.value, record.price);
        }
    }

    #[test]
    fn test_chart_series_fifth_entry_is_docuclipper() {
        let catalog = VendorCatalog::new();
        let series = chart_series(catalog.vendors());
        assert_eq!(series[4].label, "DocuClipper");
        assert_eq!(series[4].value, 30.0);
    }

    #[test]
    fn test_detail_payload_joins_focus_and_lists() {
        let catalog = VendorCatalog::new();
        let payload = detail_payload("Amazon Textract", &catalog).unwrap();

        assert_eq!(payload.name, "Amazon Textract");
        assert_eq!(payload.focus, "Tabelas e Formulários");
        assert_eq!(
            payload.advantages,
            vec!["Ótimo em tabelas e formulários", "Alta escalabilidade"]
        );
        assert_eq!(
            payload.disadvantages,
            vec!["Custo pode crescer", "Curva de aprendizado no AWS"]
        );
    }

    #[test]
    fn test_detail_payload_unknown_vendor_fails() {
        let catalog = VendorCatalog::new();
        let err = detail_payload("ABBYY", &catalog).unwrap_err();
        assert_eq!(
            err,
            CatalogError::NotFound {
                name: "ABBYY".to_string()
            }
        );
    }

    #[test]
    fn test_chart_point_serializes_as_label_value() {
        let point = ChartPoint {
            label: "DocuClipper".to_string(),
            value: 30.0,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json, serde_json::json!({"label": "DocuClipper", "value": 30.0}));
    }

    #[test]
    fn test_export_document_has_all_three_sections() {
        let catalog = VendorCatalog::new();
        let document = export_document(&catalog).unwrap();

        let chart = document["chart"].as_array().expect("chart section");
        let details = document["details"].as_array().expect("details section");
        let highlights = document["highlights"].as_array().expect("highlights section");

        assert_eq!(chart.len(), catalog.vendors().len());
        assert_eq!(details.len(), catalog.vendors().len());
        assert_eq!(highlights.len(), catalog.highlights().len());

        for (entry, record) in details.iter().zip(catalog.vendors()) {
            assert_eq!(entry["name"], serde_json::json!(record.name));
        }
    }

    #[test]
    fn test_highlight_cards_is_identity() {
        let catalog = VendorCatalog::new();
        let cards = highlight_cards(catalog.highlights());
        assert_eq!(cards, catalog.highlights());
    }
}
