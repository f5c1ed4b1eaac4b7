use std::ops::Range;

/// A lowercased literal needle used for case-insensitive substring search.
///
/// Comparison happens per character after `char::to_lowercase`, so match
/// boundaries always fall on character boundaries of the haystack and the
/// returned ranges can slice the original text directly.
#[derive(Debug, Clone)]
pub(crate) struct FoldedNeedle {
	chars: Vec<char>,
}

impl FoldedNeedle {
	/// Returns `None` for an empty needle, which would match everywhere.
	pub(crate) fn new(needle: &str) -> Option<Self> {
		let chars: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
		(!chars.is_empty()).then_some(Self { chars })
	}

	/// Whether the needle occurs anywhere in `haystack`.
	pub(crate) fn is_in(&self, haystack: &str) -> bool {
		self.find_in(haystack, 0).is_some()
	}

	/// Byte range of the first occurrence at or after byte offset `from`.
	pub(crate) fn find_in(&self, haystack: &str, from: usize) -> Option<Range<usize>> {
		let rest = haystack.get(from..)?;
		rest.char_indices().find_map(|(offset, _)| {
			let start = from + offset;
			self.match_len(&haystack[start..])
				.map(|len| start..start + len)
		})
	}

	/// Byte length of a match anchored at the start of `text`.
	fn match_len(&self, text: &str) -> Option<usize> {
		let mut expected = self.chars.iter().copied();
		let mut next = expected.next();
		for (offset, ch) in text.char_indices() {
			for lower in ch.to_lowercase() {
				match next {
					Some(want) if want == lower => next = expected.next(),
					_ => return None,
				}
			}
			if next.is_none() {
				return Some(offset + ch.len_utf8());
			}
		}
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_needle_is_rejected() {
		assert!(FoldedNeedle::new("").is_none());
		assert!(FoldedNeedle::new(" ").is_some());
	}

	#[test]
	fn finds_case_insensitive_ranges() {
		let needle = FoldedNeedle::new("WIL").expect("needle");
		assert_eq!(needle.find_in("Sarah Wilson", 0), Some(6..9));
		assert_eq!(needle.find_in("Sarah Wilson", 7), None);
	}

	#[test]
	fn ranges_are_byte_offsets_into_original_text() {
		let needle = FoldedNeedle::new("ö").expect("needle");
		let text = "aÖbö";
		let first = needle.find_in(text, 0).expect("first");
		assert_eq!(&text[first.clone()], "Ö");
		let second = needle.find_in(text, first.end).expect("second");
		assert_eq!(&text[second], "ö");
	}

	#[test]
	fn partial_tail_does_not_match() {
		let needle = FoldedNeedle::new("sketchy").expect("needle");
		assert!(!needle.is_in("project_mockups.sketch"));
	}
}
