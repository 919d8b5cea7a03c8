//! End-to-end game scenarios through the public API.

use hotseat_tictactoe::{
    BoardState, Cell, GameController, IllegalMoveReason, InputEvent, Player, Position, Status,
    StatusMessage,
};

fn select_all(controller: &mut GameController, indices: &[usize]) -> StatusMessage {
    let mut message = controller.status_message();
    for &index in indices {
        message = controller.handle_event(InputEvent::CellSelected(index));
    }
    message
}

#[test]
fn test_scenario_a_four_moves_no_winner() {
    let mut board = BoardState::new();
    board.place(4, Player::One).expect("valid move");
    board.place(0, Player::Two).expect("valid move");
    board.place(2, Player::One).expect("valid move");
    board.place(6, Player::Two).expect("valid move");

    assert_eq!(
        board.cells(),
        [
            Cell::Occupied(Player::Two),
            Cell::Empty,
            Cell::Occupied(Player::One),
            Cell::Empty,
            Cell::Occupied(Player::One),
            Cell::Empty,
            Cell::Occupied(Player::Two),
            Cell::Empty,
            Cell::Empty,
        ]
    );
    assert_eq!(board.status(), Status::InProgress);
    assert_eq!(board.current_player(), Player::One);
    assert_eq!(board.move_count(), 4);
}

#[test]
fn test_scenario_b_top_row_win() {
    let mut controller = GameController::new();
    let message = select_all(&mut controller, &[0, 3, 1, 4, 2]);

    assert_eq!(controller.board().status(), Status::Won(Player::One));
    assert_eq!(message.to_string(), "PLAYER 1 WINS!");

    // Board is frozen after the win.
    let frozen = controller.board().clone();
    let mut board = frozen.clone();
    let err = board
        .place(5, board.current_player())
        .expect_err("game is over");
    assert_eq!(err.reason(), IllegalMoveReason::GameOver);
    assert_eq!(board, frozen);

    // The controller swallows the same attempt.
    assert_eq!(controller.on_cell_selected(5).to_string(), "PLAYER 1 WINS!");
    assert_eq!(controller.board(), &frozen);
}

#[test]
fn test_scenario_b_wrong_player_after_win() {
    let mut board = BoardState::new();
    for (index, player) in [
        (0, Player::One),
        (3, Player::Two),
        (1, Player::One),
        (4, Player::Two),
        (2, Player::One),
    ] {
        board.place(index, player).expect("valid move");
    }

    let err = board.place(5, Player::Two).expect_err("game is over");
    assert_eq!(err.reason(), IllegalMoveReason::GameOver);
}

#[test]
fn test_scenario_c_draw() {
    let mut controller = GameController::new();
    let message = select_all(&mut controller, &[0, 1, 2, 4, 5, 3, 6, 8, 7]);

    assert_eq!(controller.board().status(), Status::Draw);
    assert_eq!(controller.board().move_count(), 9);
    assert_eq!(message, StatusMessage::Tie);
    assert_eq!(message.to_string(), "TIE!");
}

#[test]
fn test_ninth_move_win_is_not_a_draw() {
    // P1 takes 0, 4, 8 as the ninth mark: the diagonal beats the full board.
    let mut controller = GameController::new();
    let message = select_all(&mut controller, &[0, 1, 2, 5, 3, 6, 4, 7, 8]);

    assert_eq!(controller.board().move_count(), 9);
    assert_eq!(message, StatusMessage::Won(Player::One));
    assert_eq!(
        controller.winning_line(),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );
}

#[test]
fn test_scenario_d_reset_after_win() {
    let mut controller = GameController::new();
    select_all(&mut controller, &[0, 3, 1, 4, 2]);
    assert_eq!(controller.status_message(), StatusMessage::Won(Player::One));

    let message = controller.on_reset_requested();
    assert_eq!(message.to_string(), "Player 1's Turn");

    let message = controller.on_cell_selected(2);
    assert_eq!(controller.cells()[2], Cell::Occupied(Player::One));
    assert_eq!(message.to_string(), "Player 2's Turn");
}

#[test]
fn test_player_two_win_names_player_two() {
    let mut controller = GameController::new();
    let message = select_all(&mut controller, &[0, 2, 1, 4, 8, 6]);

    assert_eq!(message.to_string(), "PLAYER 2 WINS!");
    assert_eq!(controller.board().current_player(), Player::Two);
}

#[test]
fn test_occupied_click_keeps_message() {
    let mut controller = GameController::new();
    controller.on_cell_selected(4);
    let message = controller.on_cell_selected(4);
    assert_eq!(message.to_string(), "Player 2's Turn");
    assert_eq!(controller.board().move_count(), 1);
}
