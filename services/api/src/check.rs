use crate::infra::build_service;
use chrono::Utc;
use clap::Args;
use donor_check::config::AppConfig;
use donor_check::eligibility::router::CheckResponse;
use donor_check::eligibility::{EligibilityView, RawSubmission, ResourceLink};
use donor_check::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Age in whole years, as typed by the donor
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) age: String,
    /// Weight in kilograms, as typed by the donor
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) weight: String,
    /// The donor is not healthy or not feeling well
    #[arg(long)]
    pub(crate) unwell: bool,
    /// The donor slept 5 hours or less last night
    #[arg(long)]
    pub(crate) short_sleep: bool,
    /// Emit the result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CriteriaArgs {
    /// Emit the criteria as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_service(&config)?;

    let submission = RawSubmission::new(args.age, args.weight, !args.unwell, !args.short_sleep);
    let result = service.check(&submission);
    let view = EligibilityView::from(&result);

    if args.json {
        let response = CheckResponse {
            view,
            resource: service.resource().clone(),
            checked_at: Utc::now(),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", render_check(&view, service.resource()));
    }

    Ok(())
}

pub(crate) fn run_criteria(args: CriteriaArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_service(&config)?;
    let criteria = service.criteria();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&criteria)?);
    } else {
        println!("{}", criteria.render());
    }

    Ok(())
}

fn render_check(view: &EligibilityView, resource: &ResourceLink) -> String {
    format!("{}\n\n{}: {}", view.render(), resource.label, resource.url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use donor_check::eligibility::EligibilityResult;

    #[test]
    fn text_output_ends_with_resource_link() {
        let view = EligibilityView::from(&EligibilityResult::Eligible {
            donation_volume_ml: 350,
        });

        let rendered = render_check(&view, &ResourceLink::default());

        assert_eq!(
            rendered,
            "Result: Eligible to Donate!\nMaximum donation amount: 350 ml\n\nVisit National Blood Centre Website: https://www.pdn.gov.my/"
        );
    }
}
