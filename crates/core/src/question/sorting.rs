//! Pure ordering helpers for question listings.
//!
//! Recency ordering happens in memory over whatever the storage adapter
//! retrieved. The cost trade-off (full retrieval, then sort) is a documented
//! policy of the repository adapter, not of this function.

use super::Question;

/// Sorts questions by `pub_date` descending and truncates to `limit`.
///
/// Questions without a `pub_date` sort last. The sort is stable: questions
/// with equal `pub_date` keep their input order, which for the storage
/// adapters means storage iteration order. No tie-break on `id` is applied.
pub fn sort_recent(mut questions: Vec<Question>, limit: usize) -> Vec<Question> {
    questions.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
    questions.truncate(limit);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn question_at(text: &str, day: u32) -> Question {
        Question::new(text).with_pub_date(
            NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_sorts_descending_by_pub_date() {
        let questions = vec![
            question_at("oldest", 1),
            question_at("newest", 9),
            question_at("middle", 5),
        ];

        let sorted = sort_recent(questions, 10);
        let texts: Vec<_> = sorted
            .iter()
            .map(|q| q.question_text.as_deref().unwrap())
            .collect();
        assert_eq!(texts, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let questions = (1..=9).map(|day| question_at("q", day)).collect();
        let sorted = sort_recent(questions, 3);
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn test_limit_larger_than_input_is_fine() {
        let sorted = sort_recent(vec![question_at("only", 1)], 5);
        assert_eq!(sorted.len(), 1);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Same pub_date: stable sort preserves storage iteration order,
        // deliberately without an id tie-break.
        let first = question_at("first", 3);
        let second = question_at("second", 3);
        let expected = vec![first.id, second.id];

        let sorted = sort_recent(vec![first, second], 10);
        let ids: Vec<_> = sorted.iter().map(|q| q.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_missing_pub_date_sorts_last() {
        let mut undated = Question::new("undated");
        undated.pub_date = None;
        let dated = question_at("dated", 1);

        let sorted = sort_recent(vec![undated, dated], 10);
        assert_eq!(sorted[0].question_text.as_deref(), Some("dated"));
        assert_eq!(sorted[1].question_text.as_deref(), Some("undated"));
    }
}
