pub mod highlight {
    use once_cell::sync::Lazy;
    use regex::Regex;

    // `.` never crosses a newline, so a match always stops at end of line.
    static COMMENT_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"#.*").expect("comment pattern compiles"));

    /// A comment on one line, as byte offsets into that line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CommentRegion {
        pub line: usize,
        pub start: usize,
        pub end: usize,
    }

    /// Holds the comment marks for the last scan. Every scan starts from
    /// nothing, so marks from an earlier buffer state can never survive.
    #[derive(Debug, Default)]
    pub struct CommentHighlighter {
        regions: Vec<CommentRegion>,
    }

    impl CommentHighlighter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn rescan<S: AsRef<str>>(&mut self, lines: &[S]) {
            self.regions.clear();
            self.regions.extend(find_comments(lines));
        }

        pub fn regions(&self) -> &[CommentRegion] {
            &self.regions
        }

        pub fn region_for_line(&self, line: usize) -> Option<&CommentRegion> {
            self.regions
                .binary_search_by_key(&line, |r| r.line)
                .ok()
                .map(|idx| &self.regions[idx])
        }
    }

    /// Scans every line for `#` through end of line. Regions come out in line
    /// order with at most one per line.
    pub fn find_comments<S: AsRef<str>>(lines: &[S]) -> Vec<CommentRegion> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(line, text)| {
                COMMENT_PATTERN.find(text.as_ref()).map(|m| CommentRegion {
                    line,
                    start: m.start(),
                    end: m.end(),
                })
            })
            .collect()
    }
}
