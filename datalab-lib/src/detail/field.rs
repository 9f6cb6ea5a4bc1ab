use std::{collections::BTreeMap, str::FromStr};

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::{Error, Prefix};

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];
const PRODUCT_LINES: [&str; 3] = ["Book", "Magazine", "Digital"];
const ENTITIES: [&str; 3] = ["US", "CA", "UK"];
const COST_CENTERS: [&str; 3] = ["BEST OF RD - DG", "PREMIUM - DG", "STANDARD - DG"];
const SOURCES: [&str; 3] = ["D - Direct Mail", "E - Email", "W - Web"];
const SUB_CHANNELS: [&str; 3] = [
    "F - BOUNCEBACK, CHEC...",
    "G - ACQUISITION",
    "H - RENEWAL",
];
/// How many issue years are offered, starting at the current one
const ISSUE_YEARS: i32 = 10;

/// Every field on the metadata tab of a campaign.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum DetailField {
    PlanNamePrefix,
    IssueYear,
    IssueMonth,
    MailDate,
    SelectionDate,
    ExecutionDate,
    Description,
    ProductLine,
    Entity,
    BookCostCenter,
    Source,
    BookSubChannel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Select,
    Date,
    LongText,
}

impl DetailField {
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        use DetailField::*;

        match self {
            PlanNamePrefix => "Plan Name Prefix*",
            IssueYear => "Issue year*",
            IssueMonth => "Issue month*",
            MailDate => "Mail date*",
            SelectionDate => "Selection date*",
            ExecutionDate => "Execution date*",
            Description => "Description",
            ProductLine => "Product line*",
            Entity => "Entity*",
            BookCostCenter => "Book cost center*",
            Source => "Source*",
            BookSubChannel => "Book sub channel*",
        }
    }

    pub fn kind(self) -> FieldKind {
        use DetailField::*;

        match self {
            MailDate | SelectionDate | ExecutionDate => FieldKind::Date,
            Description => FieldKind::LongText,
            PlanNamePrefix | IssueYear | IssueMonth | ProductLine | Entity | BookCostCenter
            | Source | BookSubChannel => FieldKind::Select,
        }
    }

    /// Choices for select fields, empty for everything else. Issue years start at
    /// `current_year`.
    pub fn options(self, current_year: i32) -> Vec<String> {
        use DetailField::*;

        let fixed: &[&str] = match self {
            PlanNamePrefix => return Prefix::iter().map(|p| p.to_string()).collect(),
            IssueYear => {
                return (0..ISSUE_YEARS)
                    .map(|offset| current_year.saturating_add(offset).to_string())
                    .collect();
            }
            IssueMonth => &MONTHS,
            ProductLine => &PRODUCT_LINES,
            Entity => &ENTITIES,
            BookCostCenter => &COST_CENTERS,
            Source => &SOURCES,
            BookSubChannel => &SUB_CHANNELS,
            MailDate | SelectionDate | ExecutionDate | Description => &[],
        };

        fixed.iter().map(|s| s.to_string()).collect()
    }

    pub fn default_value(self) -> &'static str {
        use DetailField::*;

        match self {
            PlanNamePrefix => "BOG",
            IssueYear => "2025",
            IssueMonth => "AUG",
            ProductLine => "Book",
            Entity => "US",
            BookCostCenter => "BEST OF RD - DG",
            Source => "D - Direct Mail",
            BookSubChannel => "F - BOUNCEBACK, CHEC...",
            MailDate | SelectionDate | ExecutionDate | Description => "",
        }
    }
}

impl FromStr for DetailField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DetailField::iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| Error::UnknownField(s.into()))
    }
}

/// The flat record bound to the metadata tab. Edits only live as long as the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDetailForm(BTreeMap<DetailField, String>);

impl Default for CampaignDetailForm {
    fn default() -> Self {
        Self(
            DetailField::iter()
                .map(|f| (f, f.default_value().to_string()))
                .collect(),
        )
    }
}

impl CampaignDetailForm {
    pub fn get(&self, field: DetailField) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Replace the value of a single field.
    pub fn set(&mut self, field: DetailField, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (DetailField, &str)> {
        self.0.iter().map(|(f, v)| (*f, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = CampaignDetailForm::default();

        assert_eq!(form.iter().count(), 12);
        assert_eq!(form.get(DetailField::PlanNamePrefix), "BOG");
        assert_eq!(form.get(DetailField::IssueMonth), "AUG");
        assert_eq!(form.get(DetailField::MailDate), "");
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut form = CampaignDetailForm::default();

        form.set(DetailField::Entity, "CA");
        let once = form.clone();
        form.set(DetailField::Entity, "CA");

        assert_eq!(form, once);
        assert_eq!(form.get(DetailField::Entity), "CA");
        assert_eq!(form.get(DetailField::Source), "D - Direct Mail");
    }

    #[test]
    fn test_options() {
        assert_eq!(
            DetailField::PlanNamePrefix.options(2026),
            ["BOG", "MT", "M", "LTE"]
        );
        assert_eq!(DetailField::IssueMonth.options(2026).len(), 12);
        assert!(DetailField::Description.options(2026).is_empty());

        let years = DetailField::IssueYear.options(2026);
        assert_eq!(years.first().map(String::as_str), Some("2026"));
        assert_eq!(years.last().map(String::as_str), Some("2035"));
    }

    #[test]
    fn test_defaults_are_options() {
        for field in DetailField::iter() {
            if field.kind() == FieldKind::Select && field != DetailField::IssueYear {
                let options = field.options(2025);
                assert!(
                    options.iter().any(|o| o == field.default_value()),
                    "{field:?}"
                );
            }
        }
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(
            "book_sub_channel".parse::<DetailField>().unwrap(),
            DetailField::BookSubChannel
        );
        assert!(matches!(
            "nope".parse::<DetailField>(),
            Err(Error::UnknownField(_))
        ));
    }
}
