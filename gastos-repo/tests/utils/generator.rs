use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use fake::faker::lorem::en::Sentence;
use fake::{Fake, Faker};
use gastos_repo::expense_repo::NewExpense;
use rand::seq::SliceRandom;
use rand::Rng;

pub trait Generator<T> {
    fn gen(&mut self) -> T;
}

struct Predefined<T> {
    values: Vec<T>,
    current_pos: usize,
}

impl<T> Predefined<T> {
    fn boxed(values: Vec<T>) -> Box<Predefined<T>> {
        Box::new(Predefined {
            values,
            current_pos: 0,
        })
    }
}

impl<T: Clone> Generator<T> for Predefined<T> {
    fn gen(&mut self) -> T {
        let v = self.values[self.current_pos].clone();
        self.current_pos += 1;
        v
    }
}

struct RandomSample<T> {
    values: Vec<T>,
}

impl<T> RandomSample<T> {
    fn boxed(values: Vec<T>) -> Box<RandomSample<T>> {
        Box::new(RandomSample { values })
    }
}

impl<T: Clone> Generator<T> for RandomSample<T> {
    fn gen(&mut self) -> T {
        self.values.choose(&mut rand::thread_rng()).unwrap().clone()
    }
}

struct FakeGenerator<F: Fake> {
    fake: F,
}

impl<F: Fake> FakeGenerator<F> {
    fn boxed(fake: F) -> Box<FakeGenerator<F>> {
        Box::new(FakeGenerator { fake })
    }
}

impl<T: fake::Dummy<F>, F> Generator<T> for FakeGenerator<F> {
    fn gen(&mut self) -> T {
        self.fake.fake()
    }
}

/// Multiples of 0.25 so that sums stay exact in floating point.
struct FakeAmount;

impl Generator<f64> for FakeAmount {
    fn gen(&mut self) -> f64 {
        f64::from(Faker.fake::<u16>()) / 4.0
    }
}

/// Some time during 2024.
struct FakeDate;

impl Generator<NaiveDateTime> for FakeDate {
    fn gen(&mut self) -> NaiveDateTime {
        let mut rng = rand::thread_rng();
        let day = NaiveDate::from_yo_opt(2024, rng.gen_range(1..=366)).unwrap();
        let time = NaiveTime::from_num_seconds_from_midnight_opt(rng.gen_range(0..86_400), 0)
            .unwrap();
        day.and_time(time)
    }
}

#[allow(dead_code)]
pub struct NewExpenseGenerator {
    desc_gen: Box<dyn Generator<String>>,
    amnt_gen: Box<dyn Generator<f64>>,
    date_gen: Box<dyn Generator<NaiveDateTime>>,
    cat_gen: Box<dyn Generator<i64>>,
}

#[allow(dead_code)]
impl NewExpenseGenerator {
    pub fn new(category_ids: Vec<i64>) -> NewExpenseGenerator {
        NewExpenseGenerator {
            desc_gen: FakeGenerator::boxed(Sentence(2..6)),
            amnt_gen: Box::new(FakeAmount),
            date_gen: Box::new(FakeDate),
            cat_gen: RandomSample::boxed(category_ids),
        }
    }

    pub fn with_categories(mut self, category_ids: Vec<i64>) -> NewExpenseGenerator {
        self.cat_gen = Predefined::boxed(category_ids);
        self
    }

    pub fn with_dates(mut self, dates: Vec<NaiveDateTime>) -> NewExpenseGenerator {
        self.date_gen = Predefined::boxed(dates);
        self
    }

    pub fn with_amounts(mut self, amounts: Vec<f64>) -> NewExpenseGenerator {
        self.amnt_gen = Predefined::boxed(amounts);
        self
    }

    pub fn generate(&mut self) -> NewExpense {
        NewExpense::new(
            self.desc_gen.gen(),
            self.amnt_gen.gen(),
            self.date_gen.gen(),
            self.cat_gen.gen(),
        )
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<NewExpense> {
        let mut vec = Vec::with_capacity(count);
        for _ in 0..count {
            vec.push(self.generate())
        }
        vec
    }
}
