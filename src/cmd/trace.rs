use clap::Args;
use wheelboard::consts::DEFAULT_LAYER;
use wheelboard::error::WbResult;
use wheelboard::geometry::{CharacterPosition, Direction, Quadrant};
use wheelboard::movement::movement_sequence;

#[derive(Args, Debug, Clone)]
pub struct TraceArgs {
    /// Primary sector of the octant (top, right, bottom, left)
    #[arg(short, long)]
    pub sector: Direction,

    /// Adjacent part of the octant
    #[arg(short, long)]
    pub part: Direction,

    /// Character slot within the octant (first, second, third, fourth)
    #[arg(long, default_value = "first")]
    pub position: CharacterPosition,

    /// Layer the stroke targets
    #[arg(short, long, default_value_t = DEFAULT_LAYER)]
    pub layer: usize,
}

pub fn run(args: &TraceArgs) -> WbResult<()> {
    let quadrant = Quadrant::new(args.sector, args.part)?;

    let index = quadrant.character_index_in_string(args.position);
    let opposite = quadrant.opposite(args.position);
    let stroke = movement_sequence(args.layer, quadrant, args.position);

    println!("octant:    {}", quadrant);
    println!("slot:      {} -> table index {}", args.position, index);
    println!("opposite:  {}", opposite);
    print!("stroke:    ");
    let rendered: Vec<String> = stroke.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" -> "));
    Ok(())
}
