use chrono::NaiveDate;

/// A uniquely named object under observation.
///
/// Exactly one instance exists per distinct name; repeated dataset rows for
/// the same name append another [`CloseApproach`] to `approaches` instead of
/// creating a second instance. Object-level attributes (`id`, diameter,
/// hazard flag) come from the first row seen for the name.
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    pub name: String,
    pub id: Option<String>,
    /// Minimum estimated diameter, kilometers.
    pub diameter_min_km: f64,
    pub is_hazardous: bool,
    /// Recorded approaches, in ingestion order.
    pub approaches: Vec<CloseApproach>,
}

impl NearEarthObject {
    pub fn new(name: String, id: Option<String>, diameter_min_km: f64, is_hazardous: bool) -> Self {
        Self {
            name,
            id,
            diameter_min_km,
            is_hazardous,
            approaches: Vec::new(),
        }
    }

    /// Dates of this object's approaches, in ingestion order.
    pub fn approach_dates(&self) -> Vec<NaiveDate> {
        self.approaches.iter().map(|a| a.date).collect()
    }
}

/// One dated observation of an object's closest approach.
///
/// Owned exclusively by the [`NearEarthObject`] it was appended to;
/// `neo_name` points back to that owner.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    pub neo_name: String,
    pub date: NaiveDate,
    pub miss_distance_km: f64,
}

impl CloseApproach {
    pub fn new(neo_name: String, date: NaiveDate, miss_distance_km: f64) -> Self {
        Self {
            neo_name,
            date,
            miss_distance_km,
        }
    }
}
