//! Accommodation catalog browsing and editing.

use crate::{
    AccommodationId, AccommodationType, Notice,
    requests::AccommodationDetails,
};

/// Case-insensitive substring filters over name and description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccommodationFilter {
    pub name: String,
    pub description: String,
}

impl AccommodationFilter {
    pub fn matches(&self, accommodation: &AccommodationType) -> bool {
        let contains = |haystack: &str, needle: &str| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        };
        contains(&accommodation.name, &self.name)
            && contains(
                accommodation.description.as_deref().unwrap_or_default(),
                &self.description,
            )
    }

    pub fn apply<'a>(
        &self,
        catalog: &'a [AccommodationType],
    ) -> Vec<&'a AccommodationType> {
        catalog.iter().filter(|a| self.matches(a)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccommodationForm {
    pub id: Option<AccommodationId>,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccommodationSubmission {
    Create(AccommodationDetails),
    Update(AccommodationId, AccommodationDetails),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccommodationFormError {
    #[error("The accommodation name is required.")]
    MissingName,
}

impl AccommodationFormError {
    pub fn notice(&self) -> Notice {
        Notice::warning("Validation", self.to_string())
    }
}

impl AccommodationForm {
    pub fn from_accommodation(accommodation: &AccommodationType) -> Self {
        Self {
            id: Some(accommodation.id),
            name: accommodation.name.clone(),
            description: accommodation.description.clone().unwrap_or_default(),
        }
    }

    pub fn submission(
        &self,
    ) -> Result<AccommodationSubmission, AccommodationFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AccommodationFormError::MissingName);
        }
        let description = self.description.trim();
        let details = AccommodationDetails {
            name: name.to_string(),
            description: (!description.is_empty())
                .then(|| description.to_string()),
        };
        Ok(match self.id {
            Some(id) => AccommodationSubmission::Update(id, details),
            None => AccommodationSubmission::Create(details),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<AccommodationType> {
        vec![
            AccommodationType {
                id: AccommodationId(1),
                name: "King".into(),
                description: Some("One large bed".into()),
            },
            AccommodationType {
                id: AccommodationId(2),
                name: "Twin".into(),
                description: Some("Two single beds".into()),
            },
            AccommodationType {
                id: AccommodationId(3),
                name: "Suite".into(),
                description: None,
            },
        ]
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert_eq!(AccommodationFilter::default().apply(&catalog()).len(), 3);
    }

    #[test]
    fn filters_are_case_insensitive_and_combined() {
        let catalog = catalog();
        let filter = AccommodationFilter {
            name: "KI".into(),
            description: String::new(),
        };
        let names: Vec<_> = filter
            .apply(&catalog)
            .into_iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["King"]);

        let filter = AccommodationFilter {
            name: "t".into(),
            description: "SINGLE".into(),
        };
        let names: Vec<_> = filter
            .apply(&catalog)
            .into_iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["Twin"]);
    }

    #[test]
    fn missing_description_only_matches_empty_filter() {
        let catalog = catalog();
        let filter = AccommodationFilter {
            name: "suite".into(),
            description: "bed".into(),
        };
        assert!(filter.apply(&catalog).is_empty());
    }

    #[test]
    fn submission_follows_identifier() {
        let mut form = AccommodationForm {
            name: " Queen ".into(),
            description: "  ".into(),
            ..Default::default()
        };
        assert_eq!(
            form.submission(),
            Ok(AccommodationSubmission::Create(AccommodationDetails {
                name: "Queen".into(),
                description: None,
            }))
        );

        form = AccommodationForm::from_accommodation(&catalog()[1]);
        assert!(matches!(
            form.submission(),
            Ok(AccommodationSubmission::Update(AccommodationId(2), _))
        ));

        form.reset();
        assert_eq!(form.submission(), Err(AccommodationFormError::MissingName));
    }
}
