// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::*;
use crate::flags::split::*;

fn split_ok(raw: &str, quoting: Quoting) -> Vec<String> {
    split(raw, quoting).unwrap()
}

#[test]
fn test_empty_input_has_no_tokens() {
    assert!(split_ok("", Quoting::Strip).is_empty());
    assert!(split_ok("", Quoting::Literal).is_empty());
    assert!(split_ok("   ", Quoting::Strip).is_empty());
    assert!(split_ok(" \t ", Quoting::Literal).is_empty());
}

#[test]
fn test_strip_splits_and_trims() {
    assert_eq!(vec!["1", "F", "TRUE", "0"], split_ok("1,F,TRUE,0", Quoting::Strip));
    assert_eq!(vec!["a", "b", ""], split_ok(" a ,b  ,", Quoting::Strip));
}

#[test]
fn test_strip_removes_quotes() {
    assert_eq!(
        vec!["true", "false", "false", "1", "0", "T", "false"],
        split_ok(r#""true,false,false,1,0,     T", false "#, Quoting::Strip)
    );
    assert_eq!(
        vec!["0", "False", "T", "false", "true", "F", "true"],
        split_ok(r#""0, False,  T,false  , true,F",true"#, Quoting::Strip)
    );
    assert_eq!(vec!["t", "f"], split_ok("'t',`f`", Quoting::Strip));
}

#[test]
fn test_literal_keeps_quoted_commas() {
    assert_eq!(vec!["a", "b,c", "d"], split_ok(r#"a,"b,c",d"#, Quoting::Literal));
    assert_eq!(vec!["a,b,c"], split_ok(r#""a,b,c""#, Quoting::Literal));
}

#[test]
fn test_literal_trims_only_unquoted_whitespace() {
    assert_eq!(vec![" a ", "b"], split_ok(r#" " a " ,  b "#, Quoting::Literal));
    assert_eq!(vec!["x y"], split_ok("  x y  ", Quoting::Literal));
}

#[test]
fn test_literal_escaped_quotes() {
    assert_eq!(
        vec![r#"say "hi""#, "x"],
        split_ok(r#""say ""hi""",x"#, Quoting::Literal)
    );
    assert_eq!(vec!["\""], split_ok("\"\"\"\"", Quoting::Literal));
}

#[test]
fn test_literal_mixed_segments() {
    assert_eq!(vec!["ab,cd"], split_ok(r#"ab",cd""#, Quoting::Literal));
}

#[test]
fn test_literal_empty_tokens() {
    assert_eq!(vec!["a", "", "b"], split_ok("a,,b", Quoting::Literal));
    assert_eq!(vec![""], split_ok(r#""""#, Quoting::Literal));
    assert_eq!(vec!["", ""], split_ok(r#""","""#, Quoting::Literal));
}

#[test]
fn test_literal_unterminated_quote() {
    match split(r#"a,"b,c"#, Quoting::Literal) {
        Err(Error::UnterminatedQuote(raw)) => assert_eq!(r#"a,"b,c"#, raw),
        r => panic!("Expected unterminated quote error, got {:?}", r),
    }
}

#[test]
fn test_quote_if_needed() {
    assert_eq!("plain", quote_if_needed("plain"));
    assert_eq!("two words", quote_if_needed("two words"));
    assert_eq!(r#""a,b""#, quote_if_needed("a,b"));
    assert_eq!(r#""""#, quote_if_needed(""));
    assert_eq!(r#"" padded""#, quote_if_needed(" padded"));
    assert_eq!(r#""say ""hi""""#, quote_if_needed(r#"say "hi""#));
}

#[test]
fn test_join_then_split() {
    let values = vec!["a,b", "", " c ", r#"d"e"#, "f"];
    let joined = join(values.iter().map(|v| quote_if_needed(v)));
    assert_eq!(values, split_ok(&joined, Quoting::Literal));
}
