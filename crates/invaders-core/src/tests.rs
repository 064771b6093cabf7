#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::constants::*;
    use crate::enums::BodyKind;
    use crate::events::GameEvent;
    use crate::input::{InputState, KEY_LEFT, KEY_RIGHT, KEY_SPACE};
    use crate::state::{BodyView, FrameSnapshot};

    /// Verify BodyKind round-trips through serde_json.
    #[test]
    fn test_body_kind_serde() {
        let variants = vec![BodyKind::Player, BodyKind::Invader, BodyKind::Bullet];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: BodyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify GameEvent round-trips through serde (tagged union).
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::BulletFired {
                shooter: BodyKind::Player,
            },
            GameEvent::BulletFired {
                shooter: BodyKind::Invader,
            },
            GameEvent::BodyDestroyed {
                kind: BodyKind::Bullet,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify FrameSnapshot can be serialized to JSON and back.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot {
            tick: 7,
            bodies: vec![BodyView {
                kind: BodyKind::Invader,
                center: DVec2::new(30.0, 30.0),
                size: DVec2::splat(INVADER_SIZE),
            }],
            events: vec![GameEvent::BulletFired {
                shooter: BodyKind::Invader,
            }],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tick, 7);
        assert_eq!(back.bodies.len(), 1);
        assert_eq!(back.bodies[0], snapshot.bodies[0]);
        assert_eq!(back.events, snapshot.events);
    }

    /// Keys never seen report as not held.
    #[test]
    fn test_input_defaults_to_released() {
        let input = InputState::new();
        assert!(!input.is_down(KEY_LEFT));
        assert!(!input.is_down(KEY_RIGHT));
        assert!(!input.is_down(KEY_SPACE));
        assert!(!input.is_down(1234));
    }

    /// Key-down and key-up toggle the held flag.
    #[test]
    fn test_input_press_release() {
        let mut input = InputState::new();

        input.key_down(KEY_SPACE);
        assert!(input.is_down(KEY_SPACE));
        assert!(!input.is_down(KEY_LEFT), "other keys unaffected");

        input.key_up(KEY_SPACE);
        assert!(!input.is_down(KEY_SPACE));

        // A release for a key never pressed is a no-op observationally.
        input.key_up(KEY_RIGHT);
        assert!(!input.is_down(KEY_RIGHT));
    }

    /// The external key codes are the standard virtual key codes.
    #[test]
    fn test_key_codes() {
        assert_eq!(KEY_LEFT, 37);
        assert_eq!(KEY_RIGHT, 39);
        assert_eq!(KEY_SPACE, 32);
    }

    /// Formation constants describe the 8x3 grid of 24.
    #[test]
    fn test_formation_constants_consistent() {
        assert_eq!(INVADER_COLUMNS * INVADER_ROWS, INVADER_COUNT);
        assert!(INVADER_SIZE < INVADER_SPACING, "slots must not overlap");
    }
}
