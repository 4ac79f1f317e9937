use sdk::*;
use sdk::anyhow::anyhow;
use winnow::ascii::dec_uint;
use winnow::combinator::{alt, delimited, separated, separated_pair};
use winnow::{PResult, Parser};

fn main() -> Result<()> {
    init();
    let path = input_path("cube_games/input.txt");
    let mut games = Vec::new();
    for line in lines(&path)? {
        let line = line?;
        let game = parse_game.parse(&line)
            .map_err(|e| anyhow!("Unable to parse game from {line}: {e}"))?;
        trace!("Parsed {game:?}");
        games.push(game);
    }

    // A game is possible if no single pull exceeds the bag contents.
    const BAG: Counts = Counts { red: 12, green: 13, blue: 14 };
    let possible_id_sum: usize = games
        .iter()
        .filter(|game| game.possible_with(BAG))
        .map(|game| game.id)
        .sum();

    let power_sum: usize = games
        .iter()
        .map(|game| {
            let bag = game.minimum_bag();
            debug!("Minimum bag for game {}: {bag:?}", game.id);
            bag.power()
        })
        .sum();

    info!("Sum of possible game IDs: {possible_id_sum}");
    info!("Sum of minimum bag powers: {power_sum}");
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Game {
    id: usize,
    pulls: Vec<Counts>,
}

impl Game {
    fn possible_with(&self, bag: Counts) -> bool {
        self.pulls.iter().all(|pull| {
            pull.red <= bag.red && pull.green <= bag.green && pull.blue <= bag.blue
        })
    }

    /// Smallest bag this game could have been played from: the per-color
    /// maximum over all pulls.
    fn minimum_bag(&self) -> Counts {
        self.pulls.iter().copied().fold(Counts::default(), Counts::max)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Counts {
    red: usize,
    green: usize,
    blue: usize,
}

impl Counts {
    fn with(mut self, color: Color, count: usize) -> Self {
        match color {
            Color::Red => self.red = count,
            Color::Green => self.green = count,
            Color::Blue => self.blue = count,
        }
        self
    }

    fn max(self, other: Self) -> Self {
        Counts {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(self) -> usize {
        self.red * self.green * self.blue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Blue,
}

// Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
fn parse_game(input: &mut &str) -> PResult<Game> {
    let id = delimited("Game ", dec_uint::<_, u64, _>, ": ").parse_next(input)? as usize;
    let pulls = separated(1.., parse_counts, "; ").parse_next(input)?;
    Ok(Game { id, pulls })
}

// 1 green, 3 red, 6 blue
fn parse_counts(input: &mut &str) -> PResult<Counts> {
    let pulls: Vec<(u64, Color)> =
        separated(1.., separated_pair(dec_uint, ' ', parse_color), ", ").parse_next(input)?;
    Ok(pulls
        .into_iter()
        .fold(Counts::default(), |counts, (count, color)| counts.with(color, count as usize)))
}

fn parse_color(input: &mut &str) -> PResult<Color> {
    alt((
        "red".value(Color::Red),
        "green".value(Color::Green),
        "blue".value(Color::Blue),
    )).parse_next(input)
}

#[cfg(test)]
mod tests {
    use sdk::init;
    use winnow::Parser;
    use crate::{parse_game, Counts, Game};

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    fn example_games() -> Vec<Game> {
        EXAMPLE
            .lines()
            .map(|line| parse_game.parse(line).unwrap())
            .collect()
    }

    #[test]
    fn parse() {
        init();
        let game = parse_game
            .parse("Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red")
            .unwrap();
        assert_eq!(4, game.id);
        assert_eq!(
            vec![
                Counts { red: 3, green: 1, blue: 6 },
                Counts { red: 6, green: 3, blue: 0 },
                Counts { red: 14, green: 3, blue: 15 },
            ],
            game.pulls,
        );
    }

    #[test]
    fn unknown_color_is_an_error() {
        assert!(parse_game.parse("Game 1: 3 chartreuse").is_err());
        assert!(parse_game.parse("Game 2: 3 red, 5 chartreuse").is_err());
    }

    #[test]
    fn possible_games() {
        let bag = Counts { red: 12, green: 13, blue: 14 };
        let id_sum: usize = example_games()
            .iter()
            .filter(|game| game.possible_with(bag))
            .map(|game| game.id)
            .sum();
        assert_eq!(8, id_sum);
    }

    #[test]
    fn minimum_bag_powers() {
        let games = example_games();
        assert_eq!(Counts { red: 4, green: 2, blue: 6 }, games[0].minimum_bag());
        let power_sum: usize = games.iter().map(|game| game.minimum_bag().power()).sum();
        assert_eq!(2286, power_sum);
    }
}
