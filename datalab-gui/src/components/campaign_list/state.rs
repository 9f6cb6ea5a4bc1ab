use std::cmp::Ordering;

use datalab_lib::Campaign;
use iced::widget::Svg;
use serde::{Deserialize, Serialize};

use crate::icons::icon;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Copy, Serialize, Deserialize)]
pub enum SortColumn {
    Name,
    Stage,
    LastModified,
    ModifiedBy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    pub fn toggle(&self, column: SortColumn) -> Self {
        if self.column == column {
            let new_direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };

            Self {
                column,
                direction: new_direction,
            }
        } else {
            // A different column than the currently sorted one has been selected
            Self {
                column,
                direction: SortDirection::default(),
            }
        }
    }

    pub fn icon<'a>(&self, column: SortColumn) -> Option<Svg<'a>> {
        if self.column == column {
            Some(match self.direction {
                SortDirection::Ascending => icon("arrow_up"),
                SortDirection::Descending => icon("arrow_down"),
            })
        } else {
            None
        }
    }

    /// Stable sort, so campaigns that compare equal keep their insertion order.
    pub fn sort(&self, campaigns: &mut [&Campaign]) {
        campaigns.sort_by(|a, b| {
            let ordering = self.compare(a, b);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    fn compare(&self, a: &Campaign, b: &Campaign) -> Ordering {
        match self.column {
            SortColumn::Name => a.name().cmp(b.name()),
            SortColumn::Stage => a.stage().cmp(b.stage()),
            SortColumn::LastModified => a.last_modified().cmp(&b.last_modified()),
            SortColumn::ModifiedBy => a.modified_by().cmp(b.modified_by()),
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Name,
            direction: SortDirection::Ascending,
        }
    }
}
