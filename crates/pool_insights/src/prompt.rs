use pool_core::fare::per_student_share;

use crate::model::RideDetails;

/// Instruction text sent to the narrative model for one ride.
pub fn build_prompt(details: &RideDetails) -> String {
    let provider = details.provider;
    let destination = &details.destination;
    let share_preview = per_student_share(details.total_fare, details.student_count);

    format!(
        r#"Analyze this student ride-pooling scenario. StudentPool groups students onto existing services like {provider}.

Group: {count} students
College: {college}
Drop-off: {destination}
Booking fare: ₹{fare}

Return JSON with exactly these keys:
{{
  "splitSuggestion": "A short, upbeat summary of the split (e.g. 'Only ₹{share_preview:.0} per student!').",
  "environmentalBenefits": "Estimated carbon reduction of this pool versus individual trips.",
  "economicImpact": "How pooling raises student spending power and improves urban mobility efficiency in Mumbai.",
  "safetyMeasures": ["Safety tip 1", "Safety tip 2", "Safety tip 3"],
  "feasibilityAnalysis": "Local traffic and route notes for {destination}.",
  "weeklySavings": "Individual savings per week (e.g. '₹1,500/week').",
  "integrationFlow": "Short steps to book through {provider}.",
  "optimizationLogic": "How the students were clustered."
}}

Use Google Maps grounding for accurate campus context."#,
        count = details.student_count,
        college = details.college_name,
        fare = details.total_fare,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pool_core::Provider;

    #[test]
    fn prompt_mentions_ride_parameters() {
        let details = RideDetails::new("IIT Bombay", "Main Building", 4, 420.0, Provider::Ola);
        let prompt = build_prompt(&details);

        assert!(prompt.contains("Group: 4 students"));
        assert!(prompt.contains("College: IIT Bombay"));
        assert!(prompt.contains("route notes for Main Building"));
        assert!(prompt.contains("Booking fare: ₹420"));
        assert!(prompt.contains("Only ₹105 per student!"));
        assert!(prompt.contains("book through Ola"));
    }
}
