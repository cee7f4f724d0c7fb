//! Closed sets of filter values accepted by the campaign listing.
//!
//! Filter values never reach a query as free text: they are parsed into one of these
//! enums first, and only the enum's own GAQL literal is rendered.

use std::fmt;
use std::str::FromStr;

use enum_iterator::Sequence;

use super::UnknownValue;

/// The `dateRange` option value meaning "do not filter by date".
pub const ALL_TIME: &str = "allTime";

/// The `campaignStatus` option value meaning "do not filter by status".
pub const ALL_STATUSES: &str = "all";

/// Predefined date ranges usable with `segments.date DURING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum DateRange {
    Today,
    Yesterday,
    Last7Days,
    LastBusinessWeek,
    ThisMonth,
    LastMonth,
    Last14Days,
    Last30Days,
    ThisWeekSunToday,
    ThisWeekMonToday,
    LastWeekSunSat,
    LastWeekMonSun,
}

impl DateRange {
    /// The GAQL literal for this range.
    pub fn as_gaql(self) -> &'static str {
        match self {
            DateRange::Today => "TODAY",
            DateRange::Yesterday => "YESTERDAY",
            DateRange::Last7Days => "LAST_7_DAYS",
            DateRange::LastBusinessWeek => "LAST_BUSINESS_WEEK",
            DateRange::ThisMonth => "THIS_MONTH",
            DateRange::LastMonth => "LAST_MONTH",
            DateRange::Last14Days => "LAST_14_DAYS",
            DateRange::Last30Days => "LAST_30_DAYS",
            DateRange::ThisWeekSunToday => "THIS_WEEK_SUN_TODAY",
            DateRange::ThisWeekMonToday => "THIS_WEEK_MON_TODAY",
            DateRange::LastWeekSunSat => "LAST_WEEK_SUN_SAT",
            DateRange::LastWeekMonSun => "LAST_WEEK_MON_SUN",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Yesterday => "Yesterday",
            DateRange::Last7Days => "Last 7 Days",
            DateRange::LastBusinessWeek => "Last Business Week",
            DateRange::ThisMonth => "This Month",
            DateRange::LastMonth => "Last Month",
            DateRange::Last14Days => "Last 14 Days",
            DateRange::Last30Days => "Last 30 Days",
            DateRange::ThisWeekSunToday => "This Week (Sun - Today)",
            DateRange::ThisWeekMonToday => "This Week (Mon - Today)",
            DateRange::LastWeekSunSat => "Last Week (Sun - Sat)",
            DateRange::LastWeekMonSun => "Last Week (Mon - Sun)",
        }
    }

    /// Interpret the optional `dateRange` option.
    ///
    /// Absent, empty and `allTime` all mean that no date filter applies.
    pub fn from_option(value: Option<&str>) -> Result<Option<DateRange>, UnknownValue> {
        match value {
            None | Some("" | ALL_TIME) => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_gaql())
    }
}

impl FromStr for DateRange {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum_iterator::all::<DateRange>()
            .find(|range| range.as_gaql() == s)
            .ok_or_else(|| UnknownValue::new("date range", s))
    }
}

/// Campaign serving statuses a listing can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum CampaignStatus {
    Enabled,
    Paused,
    Removed,
}

impl CampaignStatus {
    pub fn as_gaql(self) -> &'static str {
        match self {
            CampaignStatus::Enabled => "ENABLED",
            CampaignStatus::Paused => "PAUSED",
            CampaignStatus::Removed => "REMOVED",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CampaignStatus::Enabled => "Enabled",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Removed => "Removed",
        }
    }

    /// Interpret the optional `campaignStatus` option.
    ///
    /// Absent, empty and `all` all mean that no status filter applies.
    pub fn from_option(value: Option<&str>) -> Result<Option<CampaignStatus>, UnknownValue> {
        match value {
            None | Some("" | ALL_STATUSES) => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_gaql())
    }
}

impl FromStr for CampaignStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum_iterator::all::<CampaignStatus>()
            .find(|status| status.as_gaql() == s)
            .ok_or_else(|| UnknownValue::new("campaign status", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_range_sentinels_mean_no_filter() {
        for sentinel in [None, Some(""), Some(ALL_TIME)] {
            assert_eq!(DateRange::from_option(sentinel), Ok(None));
        }
    }

    #[test]
    fn every_date_range_round_trips_through_its_literal() {
        for range in enum_iterator::all::<DateRange>() {
            assert_eq!(DateRange::from_option(Some(range.as_gaql())), Ok(Some(range)));
        }
    }

    #[test]
    fn free_text_date_range_is_rejected() {
        assert_eq!(
            DateRange::from_option(Some("LAST_7_DAYS OR campaign.id > 0")),
            Err(UnknownValue::new(
                "date range",
                "LAST_7_DAYS OR campaign.id > 0"
            ))
        );
        // literals are case sensitive
        assert!(DateRange::from_option(Some("last_7_days")).is_err());
    }

    #[test]
    fn campaign_status_sentinels_mean_no_filter() {
        for sentinel in [None, Some(""), Some(ALL_STATUSES)] {
            assert_eq!(CampaignStatus::from_option(sentinel), Ok(None));
        }
        assert_eq!(
            CampaignStatus::from_option(Some("PAUSED")),
            Ok(Some(CampaignStatus::Paused))
        );
        assert!(CampaignStatus::from_option(Some("ENABLED' OR '1")).is_err());
    }
}
