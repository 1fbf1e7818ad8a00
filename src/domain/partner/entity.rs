use serde::{Deserialize, Serialize};

/// A business partner purchasing products, tracked with contact and
/// classification data. This is the root entity of the partner domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partner {
    /// Immutable identifier, assigned at creation time
    pub id: i64,

    /// Reference to the partner type (classification)
    pub type_id: i64,

    /// Display label of the partner type, joined at read time
    pub type_label: String,

    /// Company name
    pub name: String,

    /// Director full name
    pub director: String,

    /// Contact phone
    pub phone: String,

    /// Free-form rating
    pub rating: String,

    /// Contact email (optional)
    pub email: Option<String>,

    /// Legal address (optional)
    pub address: Option<String>,

    /// Tax identification number (optional)
    pub inn: Option<String>,

    /// Cumulative sales volume, derived from the warehouse aggregate.
    /// Never stored on the partner row; 0.0 when no sales exist.
    pub total_sales: f64,
}

impl Partner {
    /// Discount percentage this partner is entitled to,
    /// derived from cumulative sales volume
    pub fn discount_percent(&self) -> u8 {
        discount_tier(self.total_sales)
    }
}

/// Caller-supplied field set for creating or updating a partner.
/// Identity and derived fields are never part of a draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerDraft {
    pub name: String,
    pub type_id: i64,
    pub director: String,
    pub phone: String,
    pub rating: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub inn: Option<String>,
}

impl PartnerDraft {
    /// Normalize caller input: trim all strings, collapse blank
    /// optional fields to `None`. Storage only ever sees the
    /// normalized form.
    pub fn normalized(&self) -> PartnerDraft {
        fn opt(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        }

        PartnerDraft {
            name: self.name.trim().to_string(),
            type_id: self.type_id,
            director: self.director.trim().to_string(),
            phone: self.phone.trim().to_string(),
            rating: self.rating.trim().to_string(),
            email: opt(&self.email),
            address: opt(&self.address),
            inn: opt(&self.inn),
        }
    }
}

/// Discount tier step function over cumulative sales volume.
///
/// Boundaries are exclusive of the tier above: exactly 300000 yields 10,
/// not 15.
pub fn discount_tier(total_sales: f64) -> u8 {
    if total_sales > 300_000.0 {
        15
    } else if total_sales > 50_000.0 {
        10
    } else if total_sales > 10_000.0 {
        5
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_tier_boundaries() {
        let cases = [
            (0.0, 0),
            (10_000.0, 0),
            (10_000.01, 5),
            (50_000.0, 5),
            (50_000.01, 10),
            (300_000.0, 10),
            (300_000.01, 15),
        ];
        for (total, expected) in cases {
            assert_eq!(discount_tier(total), expected, "total_sales = {}", total);
        }
    }

    #[test]
    fn test_partner_discount_percent_uses_total_sales() {
        let partner = Partner {
            id: 1,
            type_id: 1,
            type_label: "OOO".to_string(),
            name: "Stroitel".to_string(),
            director: "Ivanov I. I.".to_string(),
            phone: "+7 912 000 00 00".to_string(),
            rating: "7".to_string(),
            email: None,
            address: None,
            inn: None,
            total_sales: 120_000.0,
        };
        assert_eq!(partner.discount_percent(), 10);
    }

    #[test]
    fn test_normalized_trims_and_collapses_blanks() {
        let draft = PartnerDraft {
            name: "  Stroitel  ".to_string(),
            type_id: 2,
            director: "Ivanov I. I.".to_string(),
            phone: " +7 912 000 00 00 ".to_string(),
            rating: "7".to_string(),
            email: Some("   ".to_string()),
            address: Some(" Pervomayskaya 1 ".to_string()),
            inn: None,
        };

        let normalized = draft.normalized();
        assert_eq!(normalized.name, "Stroitel");
        assert_eq!(normalized.phone, "+7 912 000 00 00");
        assert_eq!(normalized.email, None);
        assert_eq!(normalized.address, Some("Pervomayskaya 1".to_string()));
        assert_eq!(normalized.inn, None);
    }
}
