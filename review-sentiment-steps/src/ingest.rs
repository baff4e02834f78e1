use {
    std::{
        fs::File,
        io::{BufRead, BufReader},
        path::Path,
    },
    anyhow::{Context, Result},
    review_sentiment_core::entity::RawReview,
    crate::progress::Progress,
};

pub struct LoadedReviews {
    pub reviews: Vec<RawReview>,
    pub malformed_lines: u64,
}

/// Reads the whole input file up front. The pipeline is a batch job and does
/// not start dispatching until every record is materialized.
pub fn load_reviews(path: &Path) -> Result<LoadedReviews> {
    let file = File::open(path)
        .with_context(|| format!("input file not found: {}", path.display()))?;

    read_reviews(BufReader::new(file))
}

// A line that fails to decode is data to discard; a read failure is a real
// fault and aborts the load.
fn read_reviews<R: BufRead>(reader: R) -> Result<LoadedReviews> {
    let mut reviews = Vec::new();
    let mut malformed_lines = 0;
    let mut progress = Progress::new("loading reviews");

    for line in reader.lines() {
        let line = line.context("failed to read from input file")?;

        match serde_json::from_str::<RawReview>(&line) {
            Ok(review) => {
                reviews.push(review);
                progress.update();
            }
            Err(_) => malformed_lines += 1,
        }
    }

    progress.finish();
    Ok(LoadedReviews { reviews, malformed_lines })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::io::Cursor,
    };

    #[test]
    fn reads_one_review_per_line() {
        let input = "{\"reviewText\": \"great\", \"overall\": 5}\n{\"reviewText\": \"bad\", \"overall\": 1}\n";
        let loaded = read_reviews(Cursor::new(input)).unwrap();
        assert_eq!(loaded.reviews.len(), 2);
        assert_eq!(loaded.malformed_lines, 0);
        assert_eq!(loaded.reviews[0].text, "great");
        assert_eq!(loaded.reviews[1].rating, 1.0);
    }

    #[test]
    fn malformed_lines_are_counted_and_dropped() {
        let input = "{\"reviewText\": \"great\", \"overall\": 5}\nnot json at all\n{broken\n";
        let loaded = read_reviews(Cursor::new(input)).unwrap();
        assert_eq!(loaded.reviews.len(), 1);
        assert_eq!(loaded.malformed_lines, 2);
    }

    #[test]
    fn blank_lines_count_as_malformed() {
        let input = "\n{\"reviewText\": \"ok\", \"overall\": 3}\n";
        let loaded = read_reviews(Cursor::new(input)).unwrap();
        assert_eq!(loaded.reviews.len(), 1);
        assert_eq!(loaded.malformed_lines, 1);
    }

    #[test]
    fn empty_input_loads_nothing() {
        let loaded = read_reviews(Cursor::new("")).unwrap();
        assert!(loaded.reviews.is_empty());
        assert_eq!(loaded.malformed_lines, 0);
    }

    #[test]
    fn missing_input_file_is_fatal() {
        assert!(load_reviews(Path::new("/nonexistent/reviews.json")).is_err());
    }
}
