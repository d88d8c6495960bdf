//! Static mock data backing the prototype.
//!
//! Two seed suggestions and their review details. The details are keyed by
//! suggestion id at seed time, so the panel never has to match on titles.

use std::collections::HashMap;
use uuid::Uuid;

use super::review::{ReviewDetail, RfiPrefill};
use super::suggestion::{Priority, Suggestion, SuggestionKind};

const STATUS_DRAFT: &str = "\
Project A — Weekly Health Report

Schedule: on track. Foundation work completed ahead of plan.
Budget: 94% of forecast, no change orders pending.
Safety: zero recordable incidents this period.
Open items: awaiting electrical submittal approval (due Friday).

Prepared for ABC LLC by the project team.";

const STATUS_ORIGINAL_EMAIL: &str = "\
From: j.alvarez@abcllc.example
Subject: Request: Weekly Health Report for Project A

Hi team,

Could you send over the standard weekly health report for Project A?
Leadership review is on Thursday, so ideally before then.

Thanks,
Jordan Alvarez
ABC LLC";

const RFI_DRAFT: &str = "\
Per your request, please provide clarification on the rebar placement \
conflict at Pier 4, Section B, concerning Pay Item #12-345.";

const RFI_ORIGINAL_EMAIL: &str = "\
From: field@contractorxyz.example
Subject: RFI: Rebar Placement Conflict (Pay Item #12-345)

During layout at Pier 4, Section B we found the #8 verticals called out on
S-402 conflict with the embedded conduit run shown on E-201. Pay Item
#12-345 covers this placement. Please advise how to proceed — crews are
standing by.

Contractor XYZ";

/// The two cards the panel starts with.
pub fn seed_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new(
            SuggestionKind::StatusReport,
            "Project Status Report Request",
            "Project A",
            "Create and send the standard health report to the customer, ABC LLC.",
            &[],
            Priority::High,
            92,
            "Generate & Send",
        ),
        Suggestion::new(
            SuggestionKind::CreateRfi,
            "Suggested Action: Create RFI",
            "Bridge Renovation",
            "AI detected a technical query from Contractor XYZ. Extracted details:",
            &[
                "Pay Item: #12-345",
                "Location: Pier 4, Section B",
                "Issue: Rebar placement conflict",
            ],
            Priority::Medium,
            78,
            "Create RFI Draft",
        ),
    ]
}

/// Review detail for one suggestion kind.
pub fn review_detail(kind: SuggestionKind) -> ReviewDetail {
    match kind {
        SuggestionKind::StatusReport => ReviewDetail {
            email_subject: "Request: Weekly Health Report for Project A".to_string(),
            project: "Project A".to_string(),
            detected_intent: "Status report request".to_string(),
            confidence: 92,
            proposed_action: "Generate the standard project health report and send it to ABC LLC".to_string(),
            draft_content: STATUS_DRAFT.to_string(),
            original_email: STATUS_ORIGINAL_EMAIL.to_string(),
            save_location: "Project A > Reports > Weekly".to_string(),
        },
        SuggestionKind::CreateRfi => ReviewDetail {
            email_subject: "RFI: Rebar Placement Conflict (Pay Item #12-345)".to_string(),
            project: "Bridge Renovation".to_string(),
            detected_intent: "Technical clarification request".to_string(),
            confidence: 78,
            proposed_action: "Create an RFI draft addressed to Contractor XYZ".to_string(),
            draft_content: RFI_DRAFT.to_string(),
            original_email: RFI_ORIGINAL_EMAIL.to_string(),
            save_location: "Bridge Renovation > RFIs".to_string(),
        },
    }
}

/// Build the id-keyed detail lookup for a set of seeded suggestions.
pub fn review_details(suggestions: &[Suggestion]) -> HashMap<Uuid, ReviewDetail> {
    suggestions.iter().map(|s| (s.id, review_detail(s.kind))).collect()
}

/// The payload the RFI card hands to the form screen.
pub fn rfi_prefill() -> RfiPrefill {
    RfiPrefill {
        project: "Bridge Renovation".to_string(),
        contractor: "Contractor XYZ".to_string(),
        subject: "RFI: Rebar Placement Conflict (Pay Item #12-345)".to_string(),
        question: RFI_DRAFT.to_string(),
    }
}
