//! Unit tests for ry-schedule.

use std::io::Cursor;

use ry_core::{NodeId, TravelDirection};

use crate::{Command, MoveTarget, Schedule, load_schedules, save_schedules};

fn every_command() -> Vec<Command> {
    vec![
        Command::Move {
            direction: TravelDirection::Forward,
            target: MoveTarget::SwitchCount {
                count: 2,
                before: true,
                clear_under_train: false,
            },
            max_speed_mph: None,
        },
        Command::Move {
            direction: TravelDirection::Reverse,
            target: MoveTarget::NamedSwitch {
                node: NodeId(4),
                before: false,
            },
            max_speed_mph: Some(15),
        },
        Command::Move {
            direction: TravelDirection::Forward,
            target: MoveTarget::EndOfTrack,
            max_speed_mph: None,
        },
        Command::Move {
            direction: TravelDirection::Reverse,
            target: MoveTarget::CarLengths { count: 2 },
            max_speed_mph: None,
        },
        Command::ConnectAir,
        Command::ReleaseHandbrakes,
        Command::SetSwitch {
            node: NodeId(4),
            thrown: true,
        },
        Command::RestoreSwitches,
        Command::SetHandbrake { car: 3 },
        Command::Uncouple { car: -2 },
        Command::Wait { seconds: 30.0 },
        Command::NoticeWait {
            message: "spot the tank car".to_string(),
        },
    ]
}

mod codec {
    use super::*;

    #[test]
    fn every_variant_round_trips() {
        let original = Schedule::new("switching job", every_command());
        let json = original.to_json().unwrap();
        let back = Schedule::from_json(&json).unwrap();
        assert_eq!(back, original);
        assert!(back.is_valid());
    }

    #[test]
    fn records_carry_the_type_discriminator() {
        let s = Schedule::new("s", vec![Command::ConnectAir]);
        let json = s.to_json().unwrap();
        assert!(json.contains("\"$Type\": \"ConnectAir\""));
    }

    #[test]
    fn unknown_tag_becomes_invalid_sentinel() {
        let json = r#"{
            "name": "s",
            "commands": [
                { "$Type": "ConnectAir" },
                { "$Type": "LightFlares", "count": 2 }
            ]
        }"#;
        let s = Schedule::from_json(json).unwrap();
        assert_eq!(s.commands.len(), 2);
        assert!(matches!(&s.commands[1],
            Command::Invalid { reason } if reason.starts_with("LightFlares:")));
        assert!(!s.is_valid());
    }

    #[test]
    fn missing_field_becomes_invalid_sentinel() {
        let json = r#"{
            "name": "s",
            "commands": [ { "$Type": "SetSwitch", "node": 3 } ]
        }"#;
        let s = Schedule::from_json(json).unwrap();
        assert!(matches!(&s.commands[0],
            Command::Invalid { reason } if reason.starts_with("SetSwitch:")));
        assert!(!s.is_valid());
    }

    #[test]
    fn record_without_tag_is_reported() {
        let json = r#"{ "name": "s", "commands": [ { "car": 1 } ] }"#;
        let s = Schedule::from_json(json).unwrap();
        assert!(matches!(&s.commands[0],
            Command::Invalid { reason } if reason.contains("<missing $Type>")));
    }

    #[test]
    fn duplicate_is_structurally_independent() {
        let original = Schedule::new("job", every_command());
        let mut copy = original.duplicate().unwrap();
        assert_eq!(copy, original);
        copy.commands.clear();
        assert_eq!(original.commands.len(), every_command().len());
    }
}

mod validity {
    use super::*;

    #[test]
    fn empty_schedule_is_invalid() {
        assert!(!Schedule::new("s", vec![]).is_valid());
    }

    #[test]
    fn sentinel_makes_schedule_invalid() {
        let s = Schedule::new(
            "s",
            vec![
                Command::ConnectAir,
                Command::Invalid {
                    reason: "x".to_string(),
                },
            ],
        );
        assert!(!s.is_valid());
    }
}

mod wages {
    use super::*;

    #[test]
    fn per_command_costs() {
        let move_cmd = Command::Move {
            direction: TravelDirection::Forward,
            target: MoveTarget::EndOfTrack,
            max_speed_mph: None,
        };
        assert_eq!(Command::ConnectAir.wage(), 10);
        assert_eq!(move_cmd.wage(), 5);
        assert_eq!(Command::RestoreSwitches.wage(), 1);
        assert_eq!(Command::SetHandbrake { car: 1 }.wage(), 1);
        assert_eq!(Command::Wait { seconds: 5.0 }.wage(), 0);
        assert_eq!(
            Command::Invalid {
                reason: "x".to_string()
            }
            .wage(),
            0
        );
    }

    #[test]
    fn only_moves_and_waits_suspend() {
        for cmd in every_command() {
            let suspends = matches!(
                cmd,
                Command::Move { .. } | Command::Wait { .. } | Command::NoticeWait { .. }
            );
            assert_eq!(cmd.is_instant(), !suspends, "{}", cmd.tag());
        }
    }
}

mod display {
    use super::*;

    #[test]
    fn ordinals_and_speed_wording() {
        let cmd = Command::Move {
            direction: TravelDirection::Forward,
            target: MoveTarget::SwitchCount {
                count: 2,
                before: true,
                clear_under_train: false,
            },
            max_speed_mph: None,
        };
        assert_eq!(
            cmd.display_text(),
            "move forward, stopping before the 2nd switch at yard speed"
        );

        let cmd = Command::Move {
            direction: TravelDirection::Reverse,
            target: MoveTarget::CarLengths { count: 2 },
            max_speed_mph: Some(15),
        };
        assert_eq!(cmd.display_text(), "move back, going 2 car lengths at max 15 mph");
    }

    #[test]
    fn teen_ordinals_use_th() {
        let cmd = Command::Move {
            direction: TravelDirection::Forward,
            target: MoveTarget::SwitchCount {
                count: 11,
                before: false,
                clear_under_train: false,
            },
            max_speed_mph: None,
        };
        assert!(cmd.display_text().contains("11th switch"));
    }
}

mod persistence {
    use super::*;

    #[test]
    fn collection_round_trips_through_a_buffer() {
        let schedules = vec![
            Schedule::new("pull the interchange", every_command()),
            Schedule::new("empty", vec![Command::ConnectAir]),
        ];
        let mut buf = Vec::new();
        save_schedules(&mut buf, &schedules).unwrap();
        let back = load_schedules(Cursor::new(buf)).unwrap();
        assert_eq!(back, schedules);
    }

    #[test]
    fn bad_record_in_saved_collection_survives_load() {
        let json = r#"[ { "name": "s", "commands": [ { "$Type": "Nope" } ] } ]"#;
        let back = load_schedules(Cursor::new(json.as_bytes())).unwrap();
        assert_eq!(back.len(), 1);
        assert!(!back[0].is_valid());
    }
}
