use spider_motion::{
    get_motion, Category, ConstructionError, Direction, MotionError, MotionId, MotionPlayer,
    Sequence,
};

const FORWARD_0: [u8; 18] = [
    80, 60, 90, 100, 90, 90, 80, 60, 90, 80, 90, 90, 100, 60, 90, 80, 90, 90,
];
const FORWARD_1: [u8; 18] = [
    80, 90, 90, 100, 90, 90, 80, 90, 90, 80, 90, 90, 100, 90, 90, 80, 90, 90,
];

fn bound(name: &str) -> MotionPlayer {
    let mut player = MotionPlayer::new();
    player.bind(name).unwrap();
    player
}

#[test]
fn forward_starts_on_first_frame_and_advances() {
    let mut player = bound("forward");

    assert_eq!(player.current().unwrap().angles(), &FORWARD_0);
    assert_eq!(player.advance().unwrap().angles(), &FORWARD_1);
}

#[test]
fn forward_wraps_after_six_steps() {
    let mut player = bound("forward");
    let first = player.current().unwrap();

    let mut last = None;
    for _ in 0..6 {
        last = Some(player.advance().unwrap());
    }

    assert_eq!(last, Some(first));
    assert_eq!(player.position(), Some(0));
}

#[test]
fn every_motion_is_cyclic() {
    for id in MotionId::ALL {
        let mut player = MotionPlayer::new();
        player.bind_id(id).unwrap();
        let frame_count = id.descriptor().frame_count();

        for _ in 0..frame_count {
            player.advance().unwrap();
        }
        assert_eq!(player.position(), Some(0), "{id}");
    }
}

#[test]
fn grab_is_a_fixed_point() {
    let mut player = bound("grab");

    for _ in 0..10 {
        assert_eq!(player.advance().unwrap().angles(), &[90, 90, 50, 90]);
    }
}

#[test]
fn bite_alternates() {
    let mut player = bound("bite");

    for _ in 0..5 {
        assert_eq!(player.advance().unwrap().angles(), &[90, 90, 0, 90]);
        assert_eq!(player.advance().unwrap().angles(), &[90, 90, 90, 90]);
    }
}

#[test]
fn reversed_body_motion_yields_previous_frame() {
    for name in ["forward", "rotate_cw"] {
        let descriptor = get_motion(name).unwrap();
        let frame_count = descriptor.frame_count();

        for p in 0..frame_count {
            let mut player = bound(name);
            for _ in 0..p {
                player.advance().unwrap();
            }
            player.reverse().unwrap();

            let expected = descriptor
                .frame_at((p + frame_count - 1) % frame_count)
                .unwrap();
            assert_eq!(player.advance().unwrap(), expected, "{name} from {p}");
            assert_eq!(player.direction(), Some(Direction::Reverse));
        }
    }
}

#[test]
fn reversed_gait_plays_the_mirrored_sequence() {
    let descriptor = get_motion("forward").unwrap();
    let mut player = bound("forward");
    player.reverse().unwrap();

    for expected in [5, 4, 3, 2, 1, 0, 5] {
        assert_eq!(
            player.advance().unwrap(),
            descriptor.frame_at(expected).unwrap()
        );
    }
}

#[test]
fn current_does_not_move_the_cursor() {
    let mut player = bound("attack");
    player.advance().unwrap();
    let frame = player.current().unwrap();

    for _ in 0..5 {
        assert_eq!(player.current().unwrap(), frame);
    }
    assert_eq!(player.position(), Some(1));
    assert_eq!(frame.category(), Category::FullRobot);
    assert_eq!(frame.len(), 22);
}

#[test]
fn unknown_motion_keeps_previous_binding() {
    let mut player = bound("forward");
    player.advance().unwrap();
    player.advance().unwrap();
    player.reverse().unwrap();

    assert_eq!(player.bind("moonwalk"), Err(MotionError::UnknownMotion));
    assert_eq!(player.motion(), Some(MotionId::Forward));
    assert_eq!(player.position(), Some(2));
    assert_eq!(player.direction(), Some(Direction::Reverse));
}

#[test]
fn rebinding_switches_motion_and_rewinds() {
    let mut player = bound("forward");
    player.advance().unwrap();
    player.bind("drop").unwrap();

    assert_eq!(player.position(), Some(0));
    assert_eq!(player.current().unwrap().angles(), &[90, 90, 150, 90]);
}

#[test]
fn empty_motion_is_rejected_at_construction() {
    assert_eq!(
        Sequence::<4>::new(&[]).unwrap_err(),
        ConstructionError::EmptySequence
    );
    assert_eq!(
        Sequence::<18>::new(&[]).unwrap_err(),
        ConstructionError::EmptySequence
    );
}

#[test]
fn frame_index_out_of_range() {
    let bite = get_motion("bite").unwrap();

    assert_eq!(
        bite.frame_at(2),
        Err(MotionError::IndexOutOfRange {
            index: 2,
            frame_count: 2
        })
    );
}

#[test]
fn attack_targets_cover_the_whole_bank() {
    let frame = get_motion("attack").unwrap().frame_at(1).unwrap();
    let targets: Vec<_> = frame.targets().collect();

    assert_eq!(targets.len(), 22);
    assert_eq!(targets[1], (1, 110));
    assert_eq!(targets[4], (4, 110));
    assert_eq!(targets[21], (21, 90));
}
