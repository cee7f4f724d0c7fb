//! The resources and operations a node invocation can ask for.

use std::fmt;
use std::str::FromStr;

use enum_iterator::Sequence;

use super::UnknownValue;

/// The resource selector of the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum Resource {
    Campaign,
    CustomQuery,
}

impl Resource {
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Campaign => "campaign",
            Resource::CustomQuery => "customQuery",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Resource::Campaign => "Campaign",
            Resource::CustomQuery => "Custom Query",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Resource {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum_iterator::all::<Resource>()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| UnknownValue::new("resource", s))
    }
}

/// Operations available on the campaign resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum CampaignOperation {
    GetAll,
    Get,
}

impl CampaignOperation {
    pub const DEFAULT: CampaignOperation = CampaignOperation::GetAll;

    pub fn as_str(self) -> &'static str {
        match self {
            CampaignOperation::GetAll => "getAll",
            CampaignOperation::Get => "get",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CampaignOperation::GetAll => "Get Many",
            CampaignOperation::Get => "Get",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CampaignOperation::GetAll => "Get many campaigns linked to the specified account",
            CampaignOperation::Get => "Get a specific campaign",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            CampaignOperation::GetAll => "Get many campaigns",
            CampaignOperation::Get => "Get a campaign",
        }
    }
}

impl fmt::Display for CampaignOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CampaignOperation {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum_iterator::all::<CampaignOperation>()
            .find(|operation| operation.as_str() == s)
            .ok_or_else(|| UnknownValue::new("campaign operation", s))
    }
}
