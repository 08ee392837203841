use focus_pilot::fatigue::{
    self, Complexity, DailyBudget, FatigueState, adjust_roi, can_accept_new_mission, compute,
};

#[test]
fn test_fresh_band_has_full_capacity() {
    for used in [0, 1, 50, 95] {
        let score = compute(&DailyBudget::new(480, used));
        assert_eq!(score.state, FatigueState::Fresh, "used={}", used);
        assert_eq!(score.capacity_multiplier, 1.0);
        assert_eq!(score.max_complexity, Complexity::Complex);
        assert!(score.can_accept_new_mission);
    }
}

#[test]
fn test_exact_boundaries_fall_into_higher_band() {
    assert_eq!(compute(&DailyBudget::new(100, 20)).state, FatigueState::Normal);
    assert_eq!(compute(&DailyBudget::new(100, 60)).state, FatigueState::Tired);
    assert_eq!(
        compute(&DailyBudget::new(100, 85)).state,
        FatigueState::Exhausted
    );
    assert_eq!(compute(&DailyBudget::new(480, 96)).state, FatigueState::Normal);
    assert_eq!(compute(&DailyBudget::new(480, 288)).state, FatigueState::Tired);
    assert_eq!(
        compute(&DailyBudget::new(480, 408)).state,
        FatigueState::Exhausted
    );
}

#[test]
fn test_normal_scenario() {
    let budget = DailyBudget::new(480, 200);
    let score = compute(&budget);

    assert!((score.usage_ratio - 0.4167).abs() < 1e-4);
    assert_eq!(score.state, FatigueState::Normal);
    assert!((score.capacity_multiplier - 0.85).abs() < f64::EPSILON);
    assert_eq!(score.max_complexity, Complexity::Medium);
    assert_eq!(score.remaining_minutes, 280);
}

#[test]
fn test_tired_and_exhausted_multipliers() {
    let tired = compute(&DailyBudget::new(100, 70));
    assert_eq!(tired.state, FatigueState::Tired);
    assert!((tired.capacity_multiplier - 0.6).abs() < f64::EPSILON);

    let exhausted = compute(&DailyBudget::new(100, 100));
    assert_eq!(exhausted.state, FatigueState::Exhausted);
    assert!((exhausted.capacity_multiplier - 0.3).abs() < f64::EPSILON);
    assert_eq!(exhausted.max_complexity, Complexity::None);
}

#[test]
fn test_overage_is_exhausted() {
    let score = compute(&DailyBudget::new(480, 600));
    assert_eq!(score.state, FatigueState::Exhausted);
    assert_eq!(score.remaining_minutes, 0);
    assert!(!can_accept_new_mission(&score));
}

#[test]
fn test_zero_total_is_exhausted() {
    let score = compute(&DailyBudget::new(0, 0));
    assert_eq!(score.state, FatigueState::Exhausted);
    assert_eq!(score.usage_ratio, 1.0);
    assert!(!score.can_accept_new_mission);
}

#[test]
fn test_compute_is_pure() {
    let budget = DailyBudget::new(480, 333);
    let first = compute(&budget);
    let second = compute(&budget);
    assert_eq!(first, second);
    assert_eq!(compute(&DailyBudget::new(480, 333)), first);
}

#[test]
fn test_only_exhausted_refuses() {
    for (used, expected) in [(0, true), (100, true), (300, true), (407, true), (408, false)] {
        let score = compute(&DailyBudget::new(480, used));
        assert_eq!(can_accept_new_mission(&score), expected, "used={}", used);
        assert_eq!(score.can_accept_new_mission, expected);
    }
}

#[test]
fn test_adjust_roi_uses_multiplier() {
    let fresh = compute(&DailyBudget::fresh(480));
    assert_eq!(adjust_roi(3.0, &fresh), 3.0);

    let tired = compute(&DailyBudget::new(100, 65));
    assert!((fatigue::adjust_roi(3.0, &tired) - 1.8).abs() < 1e-9);
}

#[test]
fn test_recommendation_keyed_off_state() {
    let fresh = compute(&DailyBudget::fresh(480));
    let exhausted = compute(&DailyBudget::new(480, 480));
    assert_eq!(fresh.recommendation, FatigueState::Fresh.recommendation());
    assert!(exhausted.recommendation.contains("stop accepting new missions"));
    assert_ne!(fresh.recommendation, exhausted.recommendation);
}

#[test]
fn test_score_serializes_quality_keys() {
    let score = compute(&DailyBudget::new(480, 200));
    let json = serde_json::to_value(&score).unwrap();
    assert_eq!(json["state"], "normal");
    assert!(json["quality_impact"]["error_rate"].is_number());
    assert!(json["quality_impact"]["decision_quality"].is_number());
    assert!(json["quality_impact"]["focus"].is_number());
}
