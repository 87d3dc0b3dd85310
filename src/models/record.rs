use chrono::NaiveDate;

/// One user's occupancy of one equipment item over a date span.
#[derive(Debug, Clone)]
pub struct UsageRecord {
    pub no: usize,                   // source row number
    pub equipment_id: String,        // groups timeline rows
    pub user: String,                // display label for the row
    pub begin_date: NaiveDate,       // inclusive start of occupancy
    pub end_date: Option<NaiveDate>, // inclusive end; None = open-ended
    pub target_user: String,
    pub purpose: String,
    pub notes: String,
}

impl UsageRecord {
    /// High-level constructor for records coming from CSV, which carries
    /// no extra metadata columns.
    pub fn new(
        no: usize,
        equipment_id: &str,
        user: &str,
        begin_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            no,
            equipment_id: equipment_id.to_string(),
            user: user.to_string(),
            begin_date,
            end_date,
            target_user: String::new(),
            purpose: String::new(),
            notes: String::new(),
        }
    }

    pub fn is_open_ended(&self) -> bool {
        self.end_date.is_none()
    }

    /// End of the interval as it affects the visible range: an open-ended
    /// record never extends the range beyond its own start.
    pub fn effective_end(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.begin_date)
    }
}
