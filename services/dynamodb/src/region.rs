use kvsign_core::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Regions DynamoDB can be reached in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// US East (N. Virginia)
    UsEast1,
    /// US West (N. California)
    UsWest1,
    /// US West (Oregon)
    UsWest2,
    /// EU (Ireland)
    EuWest1,
    /// EU (Frankfurt)
    EuCentral1,
    /// Asia Pacific (Singapore)
    ApSoutheast1,
    /// Asia Pacific (Tokyo)
    ApNortheast1,
    /// Asia Pacific (Seoul)
    ApNortheast2,
    /// Asia Pacific (Sydney)
    ApSoutheast2,
    /// South America (São Paulo)
    SaEast1,
    /// AWS GovCloud (US-West)
    UsGovWest1,
    /// China (Beijing)
    CnNorth1,
}

impl Region {
    /// All known regions.
    pub const ALL: [Region; 12] = [
        Region::UsEast1,
        Region::UsWest1,
        Region::UsWest2,
        Region::EuWest1,
        Region::EuCentral1,
        Region::ApSoutheast1,
        Region::ApNortheast1,
        Region::ApNortheast2,
        Region::ApSoutheast2,
        Region::SaEast1,
        Region::UsGovWest1,
        Region::CnNorth1,
    ];

    /// Region identifier used in scopes and hosts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::UsEast1 => "us-east-1",
            Region::UsWest1 => "us-west-1",
            Region::UsWest2 => "us-west-2",
            Region::EuWest1 => "eu-west-1",
            Region::EuCentral1 => "eu-central-1",
            Region::ApSoutheast1 => "ap-southeast-1",
            Region::ApNortheast1 => "ap-northeast-1",
            Region::ApNortheast2 => "ap-northeast-2",
            Region::ApSoutheast2 => "ap-southeast-2",
            Region::SaEast1 => "sa-east-1",
            Region::UsGovWest1 => "us-gov-west-1",
            Region::CnNorth1 => "cn-north-1",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| Error::missing_context(format!("unknown region: {s}")))
    }
}
