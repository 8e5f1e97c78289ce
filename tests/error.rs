use pretty_assertions::assert_eq;
use roguelike::error::{AnimationError, AudioError, GameError, ParseError, RenderError};

#[test]
fn test_game_error_from_animation_error() {
    let game_error: GameError = AnimationError::InvalidFrameDuration(0.0).into();
    assert!(matches!(game_error, GameError::Animation(_)));
}

#[test]
fn test_game_error_from_render_error() {
    let game_error: GameError = RenderError::Failed("canvas lost".to_string()).into();
    assert!(matches!(game_error, GameError::Render(_)));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ParseError::RaggedRow {
            row: 3,
            expected: 20,
            found: 19
        }
        .to_string(),
        "Board row 3 has 19 cells, expected 20"
    );
    assert_eq!(
        GameError::from(RenderError::MissingImage("coin".to_string())).to_string(),
        "Render error: No image loaded for identifier: coin"
    );
    assert_eq!(AudioError::MissingSound("step").to_string(), "No sound loaded for identifier: step");
    assert_eq!(GameError::InvalidState("no hero".to_string()).to_string(), "Invalid state: no hero");
}
