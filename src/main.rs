//! Gomoku opponent CLI
//!
//! Runs the engine through a few fixed positions and an engine-vs-engine game,
//! printing the chosen moves and timings.

use gomoku::{AIEngine, Board, Difficulty, GameMode, GameResult, GameState, Pos, Stone};

fn main() {
    println!("===========================================");
    println!("       Gomoku Opponent v0.1.0");
    println!("===========================================\n");

    println!("--- Test 1: Empty Board ---");
    test_empty_board();

    println!("\n--- Test 2: Find Winning Move ---");
    test_winning_move();

    println!("\n--- Test 3: Block Opponent Win ---");
    test_block_opponent();

    println!("\n--- Test 4: Greedy Response ---");
    test_greedy_response();

    println!("\n--- Test 5: Medium vs Easy (15x15) ---");
    play_match(15, 15, Difficulty::Medium, Difficulty::Easy);

    println!("\n===========================================");
    println!("          All Tests Completed!");
    println!("===========================================");
}

fn report(expected: Pos, engine: &mut AIEngine, board: &mut Board, color: Stone) {
    let result = engine.get_move_with_stats(board, color);
    match result.best_move {
        Some(m) => {
            println!("  {:?} plays: ({}, {})", color, m.x, m.y);
            println!("  Source: {:?}", result.source);
            println!("  Score: {}", result.score);
            println!("  Time: {}ms, nodes: {}", result.time_ms, result.nodes);
            println!("  Expected: ({}, {})", expected.x, expected.y);
            if m == expected {
                println!("  Result: PASS");
            } else {
                println!("  Result: FAIL - Wrong move");
            }
        }
        None => println!("  Result: FAIL - No move found"),
    }
}

fn test_empty_board() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let (Ok(mut engine), Ok(mut board)) = (
            AIEngine::new(15, 15, difficulty),
            Board::new(15, 15),
        ) else {
            return;
        };
        println!("  [{}]", difficulty);
        report(Pos::new(7, 7), &mut engine, &mut board, Stone::Black);
    }
}

fn test_winning_move() {
    let (Ok(mut engine), Ok(mut board)) = (
        AIEngine::new(9, 9, Difficulty::Hard),
        Board::new(9, 9),
    ) else {
        return;
    };
    // Black has 4 in a row, needs one more
    for x in 0..4 {
        board.place_stone(Pos::new(x, 4), Stone::Black);
    }
    board.place_stone(Pos::new(4, 5), Stone::White);
    board.place_stone(Pos::new(5, 5), Stone::White);
    report(Pos::new(4, 4), &mut engine, &mut board, Stone::Black);
}

fn test_block_opponent() {
    let (Ok(mut engine), Ok(mut board)) = (
        AIEngine::new(9, 9, Difficulty::Hard),
        Board::new(9, 9),
    ) else {
        return;
    };
    // White has 4 in a row, Black must block
    for y in 0..4 {
        board.place_stone(Pos::new(0, y), Stone::White);
    }
    board.place_stone(Pos::new(4, 4), Stone::Black);
    report(Pos::new(0, 4), &mut engine, &mut board, Stone::Black);
}

fn test_greedy_response() {
    let (Ok(mut engine), Ok(mut board)) = (
        AIEngine::new(9, 9, Difficulty::Medium),
        Board::new(9, 9),
    ) else {
        return;
    };
    board.place_stone(Pos::new(4, 4), Stone::Black);
    report(Pos::new(6, 4), &mut engine, &mut board, Stone::White);
}

fn play_match(width: usize, height: usize, black: Difficulty, white: Difficulty) {
    let mut game = match GameState::new(width, height, GameMode::PvP, black) {
        Ok(game) => game,
        Err(err) => {
            println!("  Result: FAIL - {}", err);
            return;
        }
    };

    loop {
        let difficulty = if game.current_turn == Stone::Black {
            black
        } else {
            white
        };
        game.set_difficulty(difficulty);
        match game.play_ai_move() {
            Ok(Some(_)) => {}
            Ok(None) => break,
            Err(err) => {
                println!("  Result: FAIL - {}", err);
                return;
            }
        }
        if game.game_over.is_some() {
            break;
        }
    }

    println!("  Moves played: {}", game.move_history.len());
    match &game.game_over {
        Some(GameResult::Win { winner, line }) => {
            let cells: Vec<String> = line.iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
            println!("  Winner: {:?} ({})", winner, if *winner == Stone::Black { black } else { white });
            println!("  Line: {}", cells.join(" "));
        }
        Some(GameResult::Draw) => println!("  Draw: board full"),
        None => println!("  Unfinished"),
    }
}
