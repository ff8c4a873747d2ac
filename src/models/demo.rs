//! Canned demo plan
//!
//! Seeds a plan with plausible sample data so a new user can explore the
//! binder before entering anything real. The "Demo" title is the marker
//! presentation layers key off to offer a reset.

use super::access::AccessEntry;
use super::account::{AccountKind, AccountRecord};
use super::contact::Contact;
use super::document::{DocumentKind, DocumentRecord};
use super::estate::InsurancePolicy;
use super::note::Note;
use super::plan::Plan;
use super::security::{PhysicalItem, RecoveryEntry};

/// Build the demo plan
pub fn demo_plan() -> Plan {
    let mut plan = Plan::new("Demo Binder", false);

    let mut spouse = Contact::new("Jordan Example", "spouse");
    spouse.phone = "555-0101".to_string();
    let mut attorney = Contact::new("Morgan & Reyes LLP", "attorney");
    attorney.phone = "555-0199".to_string();
    attorney.notes = "Holds a copy of the will".to_string();
    plan.contacts = vec![spouse, attorney];

    let mut email = AccessEntry::new("Primary email");
    email.username = "demo@example.com".to_string();
    email.credential_location = "Password manager".to_string();
    plan.access = vec![email];

    let mut checking = AccountRecord::new("First National Bank", AccountKind::Checking);
    checking.identifier_hint = "...4821".to_string();
    let retirement = AccountRecord::new("Vanguard", AccountKind::Retirement);
    plan.accounts = vec![checking, retirement];

    let mut deed = DocumentRecord::new("House deed", DocumentKind::Deed);
    deed.location = "Bank deposit box".to_string();
    plan.documents = vec![deed];

    let mut safe = PhysicalItem::new("Home safe");
    safe.location = "Bedroom closet".to_string();
    safe.access_notes = "Combination with attorney".to_string();
    plan.physical_security = vec![safe];

    plan.emergency.instructions = "Call Jordan first, then the attorney.".to_string();
    plan.emergency.meeting_point = "Front of the library on Main St".to_string();

    let mut codes = RecoveryEntry::new("Primary email");
    codes.method = "printed backup codes".to_string();
    codes.location = "Home safe".to_string();
    plan.security_recovery = vec![codes];

    plan.will.exists = true;
    plan.will.location = "Attorney's office".to_string();
    plan.will.executor = "Jordan Example".to_string();

    plan.financial.advisor = "Casey Chen, 555-0150".to_string();
    plan.financial.insurance_policies = vec![InsurancePolicy::new("Acme Mutual", "term life")];

    plan.notes = vec![Note::new(
        "About this demo",
        "This binder is sample data. Reset it and create your own when ready.",
    )];

    plan
}
