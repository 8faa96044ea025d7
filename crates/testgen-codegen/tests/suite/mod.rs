mod end_to_end;
mod fixtures;
mod seeded_values;
