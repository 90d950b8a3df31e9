//! Quick actions and their navigation targets.

use serde::Serialize;

/// Known quick actions on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Upload,
    Search,
    Analytics,
    Settings,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::Upload,
        QuickAction::Search,
        QuickAction::Analytics,
        QuickAction::Settings,
    ];

    /// Parse the action id carried by the triggering control. Unknown ids
    /// map to `None`; callers treat that as a no-op.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "upload" => Some(Self::Upload),
            "search" => Some(Self::Search),
            "analytics" => Some(Self::Analytics),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }

    /// Object page this action navigates to.
    pub fn target(self) -> NavTarget {
        let (object_api_name, action_name) = match self {
            Self::Upload => ("Contract__c", "New"),
            Self::Search => ("Contract__c", "List"),
            Self::Analytics => ("Report", "List"),
            Self::Settings => ("Setup", "Home"),
        };
        NavTarget {
            object_api_name: object_api_name.to_string(),
            action_name: action_name.to_string(),
        }
    }

    /// Display metadata for the host's quick-action button strip.
    pub fn button(self) -> QuickActionButton {
        match self {
            Self::Upload => QuickActionButton {
                label: "Upload Contract",
                icon: "utility:upload",
                variant: "brand",
            },
            Self::Search => QuickActionButton {
                label: "Search Contracts",
                icon: "utility:search",
                variant: "neutral",
            },
            Self::Analytics => QuickActionButton {
                label: "View Analytics",
                icon: "utility:chart",
                variant: "neutral",
            },
            Self::Settings => QuickActionButton {
                label: "Settings",
                icon: "utility:settings",
                variant: "neutral",
            },
        }
    }
}

/// Object page the host navigator should open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavTarget {
    pub object_api_name: String,
    pub action_name: String,
}

/// Navigation request envelope dispatched to the host navigator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavRequest {
    #[serde(rename = "type")]
    pub page_type: String,
    pub attributes: NavTarget,
}

impl NavRequest {
    /// Standard object-page request, the only page type the dashboard emits.
    pub fn object_page(attributes: NavTarget) -> Self {
        Self {
            page_type: "standard__objectPage".to_string(),
            attributes,
        }
    }
}

/// External collaborator that performs page navigation.
pub trait Navigator {
    fn navigate(&self, request: NavRequest);
}

/// Display metadata for one quick-action button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickActionButton {
    pub label: &'static str,
    pub icon: &'static str,
    pub variant: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_map_to_fixed_targets() {
        let cases = [
            ("upload", "Contract__c", "New"),
            ("search", "Contract__c", "List"),
            ("analytics", "Report", "List"),
            ("settings", "Setup", "Home"),
        ];
        for (id, object, action) in cases {
            let target = QuickAction::from_id(id).unwrap().target();
            assert_eq!(target.object_api_name, object, "action id {id}");
            assert_eq!(target.action_name, action, "action id {id}");
        }
    }

    #[test]
    fn unknown_id_parses_to_none() {
        assert_eq!(QuickAction::from_id("unknown"), None);
        assert_eq!(QuickAction::from_id(""), None);
        assert_eq!(QuickAction::from_id("Upload"), None);
    }

    #[test]
    fn nav_request_serializes_to_host_contract() {
        let request = NavRequest::object_page(QuickAction::Upload.target());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "standard__objectPage");
        assert_eq!(json["attributes"]["objectApiName"], "Contract__c");
        assert_eq!(json["attributes"]["actionName"], "New");
    }

    #[test]
    fn button_strip_metadata() {
        let labels: Vec<&str> = QuickAction::ALL.iter().map(|a| a.button().label).collect();
        assert_eq!(
            labels,
            ["Upload Contract", "Search Contracts", "View Analytics", "Settings"]
        );
        assert_eq!(QuickAction::Upload.button().variant, "brand");
        assert_eq!(QuickAction::Settings.button().icon, "utility:settings");
    }
}
