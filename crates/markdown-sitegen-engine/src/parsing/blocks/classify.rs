use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a block into exactly one [`BlockType`].
///
/// Rules are tried in order and the first match wins: heading, code fence,
/// quote, unordered list, ordered list, paragraph. Heading and code look at
/// the block as a whole; the line-based rules need every line to conform,
/// so a single stray line demotes the block to a paragraph.
pub fn classify(block: &str) -> BlockType {
    if Heading::level(block).is_some() {
        return BlockType::Heading;
    }

    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }

    if all_lines(block, BlockQuote::is_quote_line) {
        return BlockType::Quote;
    }

    if all_lines(block, UnorderedList::is_item_line) {
        return BlockType::UnorderedList;
    }

    if all_lines(block, OrderedList::is_item_line) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

fn all_lines(block: &str, matches: impl Fn(&str) -> bool) -> bool {
    block.split('\n').all(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::heading("### I'm a level 3 heading", BlockType::Heading)]
    #[case::heading_multiline("# Title\nwith more text", BlockType::Heading)]
    #[case::code_inline("``` I'm some code text ```", BlockType::Code)]
    #[case::code_fenced("```\nfn main() {}\n```", BlockType::Code)]
    #[case::code_lone_fence("```", BlockType::Code)]
    #[case::code_unclosed("```\nfn main() {}", BlockType::Paragraph)]
    #[case::quote(">This is a quote\n>And another", BlockType::Quote)]
    #[case::quote_spaced("> This is a\n> blockquote block", BlockType::Quote)]
    #[case::unordered("- This is an unordered list item\n- And another", BlockType::UnorderedList)]
    #[case::ordered("1. This is an ordered list item\n2. And another", BlockType::OrderedList)]
    #[case::ordered_two_digits("10. tenth", BlockType::Paragraph)]
    #[case::unordered_broken("- This is a unordered list item\nBut not this one", BlockType::Paragraph)]
    #[case::ordered_broken("1. This is an ordered list item\nBut not this one", BlockType::Paragraph)]
    #[case::quote_broken("> quoted\nnot quoted", BlockType::Paragraph)]
    #[case::hashtag("#hashtag is not a heading", BlockType::Paragraph)]
    #[case::plain("just some text", BlockType::Paragraph)]
    fn classifies(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn heading_wins_over_code() {
        assert_eq!(classify("# ```"), BlockType::Heading);
    }

    #[test]
    fn classification_is_stable() {
        let block = "- a\n- b";
        assert_eq!(classify(block), classify(block));
    }
}
