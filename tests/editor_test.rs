use konko_markup::{Editor, EditorMode, Error, RenderOptions, Selection, ToolbarAction};
use pretty_assertions::assert_eq;

#[test]
fn test_new_editor_starts_in_markup_mode() {
    let editor = Editor::default();
    assert_eq!(editor.mode(), EditorMode::Markup);
    assert_eq!(editor.content(), "");
    assert_eq!(editor.preview(), "");
}

#[test]
fn test_input_replaces_active_surface() {
    let mut editor = Editor::default();
    editor.input("**draft**");
    assert_eq!(editor.content(), "**draft**");
    assert_eq!(editor.preview(), "<strong>draft</strong>");
}

#[test]
fn test_markup_toolbar_then_preview() {
    let mut editor = Editor::with_markup(RenderOptions::default(), "x");
    let sel = editor
        .apply(&ToolbarAction::Link("http://a.b".to_string()), Selection::new(0, 1))
        .expect("selection is valid");
    assert_eq!(editor.content(), "[x](http://a.b)");
    assert_eq!(sel, Selection::new(1, 2));
    assert_eq!(
        editor.preview(),
        "<a href=\"http://a.b\" target=\"_blank\">x</a>"
    );
}

#[test]
fn test_wysiwyg_toolbar_survives_switch_back() {
    let mut editor = Editor::with_markup(RenderOptions::default(), "hi there");
    editor.toggle_mode();
    assert_eq!(editor.content(), "hi there");

    editor
        .apply(&ToolbarAction::Bold, Selection::new(0, 2))
        .expect("selection is valid");
    editor
        .apply(&ToolbarAction::Strike, Selection::new(10, 15))
        .expect("selection is valid");
    assert_eq!(editor.content(), "<b>hi</b> <s>there</s>");

    assert_eq!(editor.toggle_mode(), EditorMode::Markup);
    assert_eq!(editor.content(), "**hi** ~~there~~");
}

#[test]
fn test_markup_readable_while_in_wysiwyg() {
    let mut editor = Editor::with_markup(RenderOptions::default(), "a\nb");
    editor.toggle_mode();
    assert_eq!(editor.content(), "a<br/>b");
    assert_eq!(editor.markup(), "a\nb");
    assert_eq!(editor.mode(), EditorMode::Wysiwyg);
}

#[test]
fn test_italic_comes_back_as_double_underscore() {
    let mut editor = Editor::with_markup(RenderOptions::default(), "_x_");
    editor.toggle_mode();
    assert_eq!(editor.content(), "<em>x</em>");
    editor.toggle_mode();
    assert_eq!(editor.content(), "__x__");
}

#[test]
fn test_out_of_range_selection_is_rejected() {
    let mut editor = Editor::with_markup(RenderOptions::default(), "ab");
    let err = editor
        .apply(&ToolbarAction::Bold, Selection::new(1, 5))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidSelection {
            start: 1,
            end: 5,
            len: 2
        }
    ));
    assert_eq!(editor.content(), "ab");
}

#[test]
fn test_bad_color_is_rejected_in_wysiwyg() {
    let mut editor = Editor::with_markup(RenderOptions::default(), "ab");
    editor.toggle_mode();
    let err = editor
        .apply(&ToolbarAction::Color("#12".to_string()), Selection::new(0, 2))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidColor(ref c) if c == "#12"));
    assert_eq!(editor.content(), "ab");
}

#[test]
fn test_quote_and_rule_in_wysiwyg() {
    let mut editor = Editor::default();
    editor.toggle_mode();
    editor.input("said");
    editor
        .apply(&ToolbarAction::Quote, Selection::new(0, 4))
        .expect("selection is valid");
    let end = editor.content().len();
    editor
        .apply(&ToolbarAction::HorizontalRule, Selection::caret(end))
        .expect("selection is valid");
    assert_eq!(editor.content(), "<blockquote>said</blockquote><hr>");
}
