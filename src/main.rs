use shutthebox::{BoardState, Dice};

fn main() {
    let board = BoardState::standard();
    let dice = Dice::default();
    let target = dice.throw();
    println!("Open tiles: {:?}", board.open_tiles());
    println!("Throw: {}", target);
    let moves = board.legal_moves(target);
    if moves.is_empty() {
        println!("No legal move, final score would be {}", board.open_sum());
    } else {
        for mv in moves {
            println!("  flip {:?}", mv.tiles());
        }
    }
}
