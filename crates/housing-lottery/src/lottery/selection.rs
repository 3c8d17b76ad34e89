use serde::Serialize;

pub const MAX_SELECTED_CITIES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("cannot select '{city}': at most {limit} cities can be selected")]
    CapacityExceeded { city: String, limit: usize },
}

/// Cities whose lotteries the applicant enters, in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CitySelection {
    cities: Vec<String>,
}

impl CitySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Ok(false)` when the city was already selected.
    pub fn add(&mut self, city: impl Into<String>) -> Result<bool, SelectionError> {
        let city = city.into();
        if self.contains(&city) {
            return Ok(false);
        }
        if self.is_full() {
            return Err(SelectionError::CapacityExceeded {
                city,
                limit: MAX_SELECTED_CITIES,
            });
        }
        self.cities.push(city);
        Ok(true)
    }

    pub fn remove(&mut self, city: &str) -> bool {
        let before = self.cities.len();
        self.cities.retain(|selected| selected != city);
        before != self.cities.len()
    }

    pub fn clear(&mut self) {
        self.cities.clear();
    }

    pub fn contains(&self, city: &str) -> bool {
        self.cities.iter().any(|selected| selected == city)
    }

    pub fn is_full(&self) -> bool {
        self.cities.len() >= MAX_SELECTED_CITIES
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_selection() -> CitySelection {
        let mut selection = CitySelection::new();
        for city in ["Tel Aviv", "Haifa", "Jerusalem"] {
            assert!(selection.add(city).expect("room for city"));
        }
        selection
    }

    #[test]
    fn fourth_city_is_rejected_and_selection_is_unchanged() {
        let mut selection = full_selection();
        let before = selection.clone();

        let error = selection.add("Eilat").expect_err("capacity reached");
        assert_eq!(
            error,
            SelectionError::CapacityExceeded {
                city: "Eilat".to_string(),
                limit: MAX_SELECTED_CITIES,
            }
        );
        assert_eq!(selection.len(), 3);
        assert_eq!(selection, before);
    }

    #[test]
    fn reselecting_a_city_is_a_no_op_even_when_full() {
        let mut selection = full_selection();
        assert!(!selection.add("Haifa").expect("already selected"));
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn removing_unknown_city_is_a_no_op() {
        let mut selection = full_selection();
        assert!(!selection.remove("Eilat"));
        assert_eq!(selection.len(), 3);

        assert!(selection.remove("Haifa"));
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec!["Tel Aviv", "Jerusalem"]
        );
        assert!(selection.add("Eilat").expect("slot freed"));
    }

    #[test]
    fn clear_empties_selection() {
        let mut selection = full_selection();
        selection.clear();
        assert!(selection.is_empty());
    }
}
